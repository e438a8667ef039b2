//! One entry point per instrument, plus a tagged request type that routes to them
//!
//! Every function validates first and only computes on valid input; callers get
//! either a complete result or the field errors, never both.

use crate::advisory::{calculate_ratio_with, RatioResult};
use crate::amortization::{calculate_emi, schedule, AmortizationSchedule, EmiResult};
use crate::assumptions::Assumptions;
use crate::compounding::{
    calculate_fixed_deposit, calculate_recurring_deposit, calculate_sip, FixedDepositResult,
    RecurringDepositResult, SipResult,
};
use crate::error::{CalcError, FieldError, ValidationErrors};
use crate::retirement::{project_retirement_with, RetirementResult};
use crate::validation::{
    FixedDepositInput, LoanInput, RatioInput, RecurringDepositInput, RetirementInput, SipInput,
    Validate,
};
use serde::{Deserialize, Serialize};

pub fn emi(input: &LoanInput) -> Result<EmiResult, ValidationErrors> {
    Ok(calculate_emi(&input.validate()?))
}

/// Payoff schedule for a raw loan form
pub fn emi_schedule(input: &LoanInput) -> Result<AmortizationSchedule, CalcError> {
    let loan = input.validate()?;
    schedule(&loan)
}

pub fn sip(input: &SipInput) -> Result<SipResult, ValidationErrors> {
    Ok(calculate_sip(&input.validate()?))
}

pub fn fixed_deposit(input: &FixedDepositInput) -> Result<FixedDepositResult, ValidationErrors> {
    Ok(calculate_fixed_deposit(&input.validate()?))
}

pub fn recurring_deposit(input: &RecurringDepositInput) -> Result<RecurringDepositResult, ValidationErrors> {
    Ok(calculate_recurring_deposit(&input.validate()?))
}

pub fn retirement(input: &RetirementInput, assumptions: &Assumptions) -> Result<RetirementResult, ValidationErrors> {
    Ok(project_retirement_with(&input.validate()?, assumptions))
}

pub fn ratio(input: &RatioInput, assumptions: &Assumptions) -> Result<RatioResult, ValidationErrors> {
    Ok(calculate_ratio_with(&input.validate()?, assumptions))
}

/// A calculation request as received from a caller, tagged by instrument
///
/// ```json
/// {"instrument": "emi", "principal": "100000", "annual_rate_percent": 8.5, "tenure_years": 5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument", rename_all = "snake_case")]
pub enum CalculationRequest {
    Emi(LoanInput),
    Sip(SipInput),
    FixedDeposit(FixedDepositInput),
    RecurringDeposit(RecurringDepositInput),
    Retirement(RetirementInput),
    Ratio(RatioInput),
}

impl CalculationRequest {
    pub const INSTRUMENTS: [&'static str; 6] =
        ["emi", "sip", "fixed_deposit", "recurring_deposit", "retirement", "ratio"];

    pub fn instrument(&self) -> &'static str {
        match self {
            CalculationRequest::Emi(_) => "emi",
            CalculationRequest::Sip(_) => "sip",
            CalculationRequest::FixedDeposit(_) => "fixed_deposit",
            CalculationRequest::RecurringDeposit(_) => "recurring_deposit",
            CalculationRequest::Retirement(_) => "retirement",
            CalculationRequest::Ratio(_) => "ratio",
        }
    }

    /// Request pre-filled with the calculator's default values
    pub fn defaults(instrument: &str) -> Result<Self, CalcError> {
        match instrument {
            "emi" => Ok(CalculationRequest::Emi(LoanInput::default())),
            "sip" => Ok(CalculationRequest::Sip(SipInput::default())),
            "fixed_deposit" => Ok(CalculationRequest::FixedDeposit(FixedDepositInput::default())),
            "recurring_deposit" => Ok(CalculationRequest::RecurringDeposit(RecurringDepositInput::default())),
            "retirement" => Ok(CalculationRequest::Retirement(RetirementInput::default())),
            "ratio" => Ok(CalculationRequest::Ratio(RatioInput::default())),
            other => Err(CalcError::UnknownInstrument(other.to_string())),
        }
    }
}

/// Computed figures for any instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrument", rename_all = "snake_case")]
pub enum CalculationResult {
    Emi(EmiResult),
    Sip(SipResult),
    FixedDeposit(FixedDepositResult),
    RecurringDeposit(RecurringDepositResult),
    Retirement(RetirementResult),
    Ratio(RatioResult),
}

/// Route a request to its instrument
pub fn evaluate(request: &CalculationRequest, assumptions: &Assumptions) -> Result<CalculationResult, ValidationErrors> {
    let result = match request {
        CalculationRequest::Emi(input) => CalculationResult::Emi(emi(input)?),
        CalculationRequest::Sip(input) => CalculationResult::Sip(sip(input)?),
        CalculationRequest::FixedDeposit(input) => CalculationResult::FixedDeposit(fixed_deposit(input)?),
        CalculationRequest::RecurringDeposit(input) => {
            CalculationResult::RecurringDeposit(recurring_deposit(input)?)
        }
        CalculationRequest::Retirement(input) => CalculationResult::Retirement(retirement(input, assumptions)?),
        CalculationRequest::Ratio(input) => CalculationResult::Ratio(ratio(input, assumptions)?),
    };
    Ok(result)
}

/// Serializable form of an evaluation: `{"ok": true, "result": ...}` or
/// `{"ok": false, "errors": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutcome {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl CalculationOutcome {
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &[FieldError] {
        self.errors.as_deref().unwrap_or(&[])
    }
}

impl From<Result<CalculationResult, ValidationErrors>> for CalculationOutcome {
    fn from(evaluated: Result<CalculationResult, ValidationErrors>) -> Self {
        match evaluated {
            Ok(result) => Self {
                ok: true,
                result: Some(result),
                errors: None,
            },
            Err(errors) => Self {
                ok: false,
                result: None,
                errors: Some(errors.into_errors()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_request_from_json() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{"instrument": "fixed_deposit", "principal": 50000, "annual_rate_percent": "6.5",
                "tenure_years": 3, "compounding_frequency": 4}"#,
        )
        .unwrap();
        assert_eq!(request.instrument(), "fixed_deposit");

        match evaluate(&request, &Assumptions::default()).unwrap() {
            CalculationResult::FixedDeposit(fd) => {
                assert_abs_diff_eq!(fd.effective_yield_percent, 6.66, epsilon = 0.005)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_every_default_request_evaluates() {
        for name in CalculationRequest::INSTRUMENTS {
            let request = CalculationRequest::defaults(name).unwrap();
            assert_eq!(request.instrument(), name);
            assert!(evaluate(&request, &Assumptions::default()).is_ok(), "{} failed", name);
        }
    }

    #[test]
    fn test_emi_schedule_from_raw_input() {
        let table = emi_schedule(&LoanInput::default()).unwrap();
        assert_eq!(table.rows.len(), 60);

        let bad = LoanInput {
            tenure_years: "0".into(),
            ..LoanInput::default()
        };
        match emi_schedule(&bad) {
            Err(CalcError::Validation(errors)) => {
                assert_eq!(errors.for_field("tenure_years"), Some("Must be greater than 0"))
            }
            other => panic!("unexpected {:?}", other.map(|t| t.rows.len())),
        }
    }

    #[test]
    fn test_unknown_instrument() {
        assert!(matches!(
            CalculationRequest::defaults("ppf"),
            Err(CalcError::UnknownInstrument(name)) if name == "ppf"
        ));
    }

    #[test]
    fn test_invalid_request_yields_no_result() {
        let request = CalculationRequest::Ratio(RatioInput {
            price_a: "2300".into(),
            price_b: "0".into(),
        });
        let outcome = CalculationOutcome::from(evaluate(&request, &Assumptions::default()));
        assert!(!outcome.is_ok());
        assert!(outcome.result().is_none());
        assert_eq!(outcome.errors().len(), 1);
        assert_eq!(outcome.errors()[0].field, "price_b");

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_outcome_json_for_valid_request() {
        let request = CalculationRequest::defaults("recurring_deposit").unwrap();
        let outcome = CalculationOutcome::from(evaluate(&request, &Assumptions::default()));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["result"]["instrument"], "recurring_deposit");
        assert_eq!(json["result"]["total_invested"], 120_000.0);
    }
}
