//! Fixed deposit maturity with periodic compounding

use crate::params::{CompoundingFrequency, FixedDepositParameters};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedDepositResult {
    pub maturity_amount: f64,
    pub principal: f64,
    pub interest_earned: f64,
    /// Annualized return in percent; depends only on rate and frequency
    pub effective_yield_percent: f64,
}

/// ((1 + r/m)^m − 1)·100 for a nominal annual percentage
pub fn effective_annual_yield(annual_rate_percent: f64, frequency: CompoundingFrequency) -> f64 {
    let m = frequency.periods_per_year() as f64;
    let periodic = annual_rate_percent / 100.0 / m;
    ((1.0 + periodic).powf(m) - 1.0) * 100.0
}

pub fn calculate_fixed_deposit(fd: &FixedDepositParameters) -> FixedDepositResult {
    let m = fd.frequency().periods_per_year() as f64;
    let periodic = fd.annual_rate_percent() / 100.0 / m;
    let maturity_amount = fd.principal() * (1.0 + periodic).powf(m * fd.tenure_years());
    let effective_yield_percent = effective_annual_yield(fd.annual_rate_percent(), fd.frequency());

    log::debug!(
        "FD of {:.2} at {}% compounded {} for {} years: maturity {:.2}, yield {:.4}%",
        fd.principal(),
        fd.annual_rate_percent(),
        fd.frequency(),
        fd.tenure_years(),
        maturity_amount,
        effective_yield_percent
    );

    FixedDepositResult {
        maturity_amount,
        principal: fd.principal(),
        interest_earned: maturity_amount - fd.principal(),
        effective_yield_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn fd(p: f64, rate: f64, years: f64, freq: CompoundingFrequency) -> FixedDepositResult {
        calculate_fixed_deposit(&FixedDepositParameters::new(p, rate, years, freq).unwrap())
    }

    #[test]
    fn test_reference_deposit() {
        // 50,000 at 6.5% for 3 years, compounded quarterly
        let result = fd(50_000.0, 6.5, 3.0, CompoundingFrequency::Quarterly);
        assert_abs_diff_eq!(result.maturity_amount, 60_670.38, epsilon = 0.01);
        assert_abs_diff_eq!(result.interest_earned, 10_670.38, epsilon = 0.01);
        assert_eq!(result.principal, 50_000.0);
        assert_abs_diff_eq!(result.effective_yield_percent, 6.66, epsilon = 0.005);
    }

    #[test]
    fn test_yearly_yield_equals_nominal_rate() {
        let result = fd(10_000.0, 7.0, 2.0, CompoundingFrequency::Yearly);
        assert_relative_eq!(result.effective_yield_percent, 7.0, max_relative = 1e-12);
        assert_relative_eq!(result.maturity_amount, 10_000.0 * 1.07 * 1.07, max_relative = 1e-12);
    }

    #[test]
    fn test_yield_independent_of_tenure() {
        let short = fd(10_000.0, 6.5, 1.0, CompoundingFrequency::Monthly);
        let long = fd(10_000.0, 6.5, 25.0, CompoundingFrequency::Monthly);
        assert_eq!(short.effective_yield_percent, long.effective_yield_percent);
    }

    #[test]
    fn test_yield_non_decreasing_in_frequency() {
        for rate in [0.0, 0.5, 6.5, 12.0, 40.0] {
            let yields: Vec<f64> = CompoundingFrequency::ALL
                .iter()
                .map(|f| effective_annual_yield(rate, *f))
                .collect();
            for pair in yields.windows(2) {
                assert!(pair[0] <= pair[1], "yield decreased at rate {}: {:?}", rate, yields);
            }
        }
    }

    #[test]
    fn test_zero_rate_returns_principal() {
        let result = fd(25_000.0, 0.0, 10.0, CompoundingFrequency::Quarterly);
        assert_eq!(result.maturity_amount, 25_000.0);
        assert_eq!(result.interest_earned, 0.0);
        assert_eq!(result.effective_yield_percent, 0.0);
    }
}
