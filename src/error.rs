//! Error types for validation and the I/O-adjacent helpers

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field (snake_case, matches the raw input struct)
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Non-empty list of field errors produced by a validator
///
/// Only [`ErrorCollector::finish`] builds one, and it never builds an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", join_reasons(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn join_reasons(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Never true for a list built by [`ErrorCollector`]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reason reported for `field`, if it failed
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.reason.as_str())
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Accumulates field errors so every bad field is reported at once
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<FieldError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, reason: impl Into<String>) {
        self.errors.push(FieldError::new(field, reason));
    }

    /// Record the error of a failed parse and return the parsed value otherwise
    pub fn take<T>(&mut self, parsed: Result<T, FieldError>) -> Option<T> {
        match parsed {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    /// Check a condition on an already-parsed value
    pub fn require(&mut self, ok: bool, field: &str, reason: impl Into<String>) {
        if !ok {
            self.push(field, reason);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Turn the collected state into a result
    ///
    /// `value` is `None` whenever a field failed to parse, which always leaves an
    /// error behind, so the returned list is never empty.
    pub fn finish<T>(mut self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(v) if self.errors.is_empty() => Ok(v),
            _ => {
                if self.errors.is_empty() {
                    self.push("input", "Incomplete input");
                }
                log::debug!("input rejected with {} field error(s)", self.errors.len());
                Err(ValidationErrors { errors: self.errors })
            }
        }
    }
}

/// Errors from the crate's I/O-adjacent helpers (schedule export, batch files)
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("schedule of {months} months exceeds the limit of {max}")]
    ScheduleTooLong { months: f64, max: u32 },
}
