//! Loan parameters

use crate::error::{ErrorCollector, ValidationErrors};
use crate::validation::rules;
use serde::Serialize;

/// Amortizing loan: principal, nominal annual rate and tenure
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check(&mut c, Some(principal), Some(annual_rate_percent), Some(tenure_years));
        c.finish(Some(Self::from_checked(principal, annual_rate_percent, tenure_years)))
    }

    pub(crate) fn from_checked(principal: f64, annual_rate_percent: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn tenure_years(&self) -> f64 {
        self.tenure_years
    }

    /// Monthly rate as a decimal (annual percent / 1200)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 1200.0
    }

    /// Number of monthly installments; fractional when the tenure is not whole months
    pub fn total_months(&self) -> f64 {
        self.tenure_years * 12.0
    }
}

pub(crate) fn check(c: &mut ErrorCollector, principal: Option<f64>, rate: Option<f64>, tenure: Option<f64>) {
    rules::positive(c, "principal", principal);
    rules::non_negative(c, "annual_rate_percent", rate);
    rules::positive(c, "tenure_years", tenure);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_values() {
        let loan = LoanParameters::new(100_000.0, 8.5, 5.0).unwrap();
        assert_eq!(loan.total_months(), 60.0);
        assert!((loan.monthly_rate() - 8.5 / 1200.0).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_non_positive_principal_and_tenure() {
        let errors = LoanParameters::new(0.0, -1.0, 0.0).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("principal"), Some("Must be greater than 0"));
        assert_eq!(errors.for_field("annual_rate_percent"), Some("Cannot be negative"));
        assert_eq!(errors.for_field("tenure_years"), Some("Must be greater than 0"));
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(LoanParameters::new(1_000.0, 0.0, 1.0).is_ok());
    }
}
