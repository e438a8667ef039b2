//! Recurring deposit maturity
//!
//! Indian RD products quote interest as simple interest on the running balance:
//! Interest = R·[n(n+1)/2]·(rate/12), Maturity = R·n + Interest.
//! This is not monthly compounding and must not be replaced by it.

use crate::params::RecurringDepositParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecurringDepositResult {
    pub maturity_amount: f64,
    pub total_invested: f64,
    pub interest_earned: f64,
}

pub fn calculate_recurring_deposit(rd: &RecurringDepositParameters) -> RecurringDepositResult {
    let r = rd.monthly_amount();
    let n = rd.total_months() as f64;
    let monthly_rate = rd.annual_rate_percent() / 100.0 / 12.0;

    let interest_earned = r * (n * (n + 1.0) / 2.0) * monthly_rate;
    let total_invested = r * n;
    let maturity_amount = total_invested + interest_earned;

    log::debug!(
        "RD of {:.2}/month at {}% for {} months: maturity {:.2}",
        r,
        rd.annual_rate_percent(),
        rd.total_months(),
        maturity_amount
    );

    RecurringDepositResult {
        maturity_amount,
        total_invested,
        interest_earned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_deposit() {
        // 2000/month at 6% for 60 months
        let rd = RecurringDepositParameters::new(2_000.0, 6.0, 60).unwrap();
        let result = calculate_recurring_deposit(&rd);
        assert_eq!(result.total_invested, 120_000.0);
        assert_abs_diff_eq!(result.interest_earned, 18_300.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.maturity_amount, 138_300.0, epsilon = 1e-6);
    }

    #[test]
    fn test_simple_interest_convention() {
        // 6 months at 12%: 1000 * 21 * 0.01 = 210
        let rd = RecurringDepositParameters::new(1_000.0, 12.0, 6).unwrap();
        let result = calculate_recurring_deposit(&rd);
        assert_abs_diff_eq!(result.interest_earned, 210.0, epsilon = 1e-9);

        // Below what true monthly compounding would give
        let compounded: f64 = (1..=6).map(|k| 1_000.0 * 1.01f64.powi(k)).sum();
        assert!(result.maturity_amount < compounded);
    }

    #[test]
    fn test_zero_rate() {
        let rd = RecurringDepositParameters::new(1_500.0, 0.0, 24).unwrap();
        let result = calculate_recurring_deposit(&rd);
        assert_eq!(result.interest_earned, 0.0);
        assert_eq!(result.maturity_amount, 36_000.0);
    }
}
