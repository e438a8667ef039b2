//! Input validation: raw form text in, parameter records or field errors out
//!
//! A [`Form`] holds the latest raw input and re-validates on every edit, so a
//! caller can keep its "calculate" action disabled while the form is invalid.

mod parse;
pub(crate) mod rules;
mod inputs;

pub use inputs::{
    FixedDepositInput, LoanInput, RatioInput, RecurringDepositInput, RetirementInput, SipInput,
};
pub use parse::{parse_number, parse_whole, parse_whole_or_zero};

use crate::error::{FieldError, ValidationErrors};
use serde::Serialize;

/// Raw input that can be checked into a parameter record
pub trait Validate {
    type Params;

    fn validate(&self) -> Result<Self::Params, ValidationErrors>;
}

/// Whether the latest input can be calculated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationState {
    Valid,
    Invalid,
}

/// Latest raw input plus the outcome of validating it
///
/// There is no terminal state: every edit re-runs validation and may move the
/// form between `Valid` and `Invalid` in either direction.
pub struct Form<I: Validate> {
    input: I,
    outcome: Result<I::Params, ValidationErrors>,
}

impl<I> std::fmt::Debug for Form<I>
where
    I: Validate + std::fmt::Debug,
    I::Params: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("input", &self.input)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl<I> Clone for Form<I>
where
    I: Validate + Clone,
    I::Params: Clone,
{
    fn clone(&self) -> Self {
        Self {
            input: self.input.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

impl<I: Validate> Form<I> {
    pub fn new(input: I) -> Self {
        let outcome = input.validate();
        Self { input, outcome }
    }

    /// Apply an edit to the raw input and re-validate
    pub fn edit(&mut self, change: impl FnOnce(&mut I)) -> ValidationState {
        change(&mut self.input);
        self.outcome = self.input.validate();
        self.state()
    }

    /// Replace the whole input (e.g. a reset) and re-validate
    pub fn replace(&mut self, input: I) -> ValidationState {
        self.input = input;
        self.outcome = self.input.validate();
        self.state()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn state(&self) -> ValidationState {
        match self.outcome {
            Ok(_) => ValidationState::Valid,
            Err(_) => ValidationState::Invalid,
        }
    }

    pub fn can_calculate(&self) -> bool {
        self.state() == ValidationState::Valid
    }

    /// Current field errors; empty when valid
    pub fn errors(&self) -> &[FieldError] {
        match &self.outcome {
            Ok(_) => &[],
            Err(e) => e.errors(),
        }
    }

    /// Validated parameters, when the form is valid
    pub fn params(&self) -> Option<&I::Params> {
        self.outcome.as_ref().ok()
    }
}

impl<I: Validate + Default> Default for Form<I> {
    fn default() -> Self {
        Self::new(I::default())
    }
}

impl<I: Validate + Default> Form<I> {
    /// Restore the calculator's default values
    pub fn reset(&mut self) -> ValidationState {
        self.replace(I::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_transitions_on_every_edit() {
        let mut form: Form<RetirementInput> = Form::default();
        assert!(form.can_calculate());

        let state = form.edit(|i| i.retirement_age = "20".into());
        assert_eq!(state, ValidationState::Invalid);
        assert_eq!(form.errors().len(), 1);
        assert!(form.params().is_none());

        // Fixing the current age makes the unchanged retirement age valid again
        let state = form.edit(|i| i.current_age = "19".into());
        assert_eq!(state, ValidationState::Valid);
        assert!(form.errors().is_empty());
        assert_eq!(form.params().map(|p| p.years_to_retirement()), Some(1));
    }

    #[test]
    fn test_form_reset_restores_defaults() {
        let mut form: Form<LoanInput> = Form::default();
        form.edit(|i| i.principal = "-5".into());
        assert!(!form.can_calculate());

        assert_eq!(form.reset(), ValidationState::Valid);
        assert_eq!(form.input(), &LoanInput::default());
    }
}
