//! Retirement planning parameters

use crate::error::{ErrorCollector, ValidationErrors};
use crate::validation::rules;
use serde::Serialize;

pub const MIN_CURRENT_AGE: u32 = 18;
pub const MAX_CURRENT_AGE: u32 = 60;
pub const MAX_RETIREMENT_AGE: u32 = 70;
pub const MAX_LIFE_EXPECTANCY: u32 = 100;

/// Ages in whole years, return as an annual percentage, expense in rupees per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RetirementParameters {
    current_age: u32,
    retirement_age: u32,
    life_expectancy: u32,
    post_retirement_return_percent: f64,
    current_annual_expense: f64,
}

impl RetirementParameters {
    pub fn new(
        current_age: u32,
        retirement_age: u32,
        life_expectancy: u32,
        post_retirement_return_percent: f64,
        current_annual_expense: f64,
    ) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check(
            &mut c,
            Some(current_age),
            Some(retirement_age),
            Some(life_expectancy),
            Some(post_retirement_return_percent),
            Some(current_annual_expense),
        );
        c.finish(Some(Self::from_checked(
            current_age,
            retirement_age,
            life_expectancy,
            post_retirement_return_percent,
            current_annual_expense,
        )))
    }

    pub(crate) fn from_checked(
        current_age: u32,
        retirement_age: u32,
        life_expectancy: u32,
        post_retirement_return_percent: f64,
        current_annual_expense: f64,
    ) -> Self {
        Self {
            current_age,
            retirement_age,
            life_expectancy,
            post_retirement_return_percent,
            current_annual_expense,
        }
    }

    pub fn current_age(&self) -> u32 {
        self.current_age
    }

    pub fn retirement_age(&self) -> u32 {
        self.retirement_age
    }

    pub fn life_expectancy(&self) -> u32 {
        self.life_expectancy
    }

    pub fn post_retirement_return_percent(&self) -> f64 {
        self.post_retirement_return_percent
    }

    pub fn current_annual_expense(&self) -> f64 {
        self.current_annual_expense
    }

    /// Always at least 1: retirement age is strictly above current age
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age - self.current_age
    }

    /// Always at least 1: life expectancy is strictly above retirement age
    pub fn years_in_retirement(&self) -> u32 {
        self.life_expectancy - self.retirement_age
    }

    /// Return as a decimal
    pub fn return_rate(&self) -> f64 {
        self.post_retirement_return_percent / 100.0
    }

    /// Copy with a different current expense
    pub fn with_current_annual_expense(&self, expense: f64) -> Result<Self, ValidationErrors> {
        Self::new(
            self.current_age,
            self.retirement_age,
            self.life_expectancy,
            self.post_retirement_return_percent,
            expense,
        )
    }
}

/// Cross-field checks only run when the field they compare against parsed
pub(crate) fn check(
    c: &mut ErrorCollector,
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    life_expectancy: Option<u32>,
    return_percent: Option<f64>,
    annual_expense: Option<f64>,
) {
    if let Some(age) = current_age {
        c.require(
            (MIN_CURRENT_AGE..=MAX_CURRENT_AGE).contains(&age),
            "current_age",
            format!("Must be {}-{}", MIN_CURRENT_AGE, MAX_CURRENT_AGE),
        );
    }

    if let Some(ret) = retirement_age {
        let above_current = current_age.map_or(true, |cur| ret > cur);
        let reason = match current_age {
            Some(cur) => format!("Must be > {} and ≤ {}", cur, MAX_RETIREMENT_AGE),
            None => format!("Must be ≤ {}", MAX_RETIREMENT_AGE),
        };
        c.require(above_current && ret <= MAX_RETIREMENT_AGE, "retirement_age", reason);
    }

    if let Some(life) = life_expectancy {
        let above_retirement = retirement_age.map_or(true, |ret| life > ret);
        let reason = match retirement_age {
            Some(ret) => format!("Must be > {} and ≤ {}", ret, MAX_LIFE_EXPECTANCY),
            None => format!("Must be ≤ {}", MAX_LIFE_EXPECTANCY),
        };
        c.require(above_retirement && life <= MAX_LIFE_EXPECTANCY, "life_expectancy", reason);
    }

    rules::non_negative(c, "post_retirement_return_percent", return_percent);
    rules::positive(c, "current_annual_expense", annual_expense);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_plan() {
        let p = RetirementParameters::new(24, 55, 65, 12.0, 100_000.0).unwrap();
        assert_eq!(p.years_to_retirement(), 31);
        assert_eq!(p.years_in_retirement(), 10);
        assert!((p.return_rate() - 0.12).abs() < 1e-15);
    }

    #[test]
    fn test_age_ordering() {
        let errors = RetirementParameters::new(40, 40, 40, 8.0, 1.0).unwrap_err();
        assert_eq!(errors.for_field("retirement_age"), Some("Must be > 40 and ≤ 70"));
        assert_eq!(errors.for_field("life_expectancy"), Some("Must be > 40 and ≤ 100"));
        assert!(errors.for_field("current_age").is_none());
    }

    #[test]
    fn test_age_limits() {
        let errors = RetirementParameters::new(17, 71, 101, 8.0, 1.0).unwrap_err();
        assert_eq!(errors.for_field("current_age"), Some("Must be 18-60"));
        assert!(errors.for_field("retirement_age").is_some());
        assert!(errors.for_field("life_expectancy").is_some());

        assert!(RetirementParameters::new(18, 70, 100, 0.0, 1.0).is_ok());
        assert!(RetirementParameters::new(60, 61, 62, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_amount_rules() {
        let errors = RetirementParameters::new(30, 60, 80, -1.0, 0.0).unwrap_err();
        assert_eq!(errors.for_field("post_retirement_return_percent"), Some("Cannot be negative"));
        assert_eq!(errors.for_field("current_annual_expense"), Some("Must be greater than 0"));
    }
}
