//! Equated monthly installment

use crate::params::LoanParameters;
use serde::{Deserialize, Serialize};

/// Outcome of an EMI calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    /// Monthly installment, unrounded
    pub emi: f64,
    pub principal: f64,
    pub total_months: f64,
    /// EMI x number of installments
    pub total_payment: f64,
    /// Total payment less principal; never negative for a non-negative rate
    pub total_interest: f64,
}

/// Level payment that repays `principal` over `months` at `monthly_rate`
///
/// EMI = P·r·(1+r)^n / ((1+r)^n − 1), evaluated as P·r / (1 − (1+r)^−n).
/// The discount term is -expm1(−n·ln1p(r)), which keeps full precision for
/// tiny rates and stays finite for long tenures, where the EMI tends to P·r.
/// A zero rate returns P / n exactly.
pub fn monthly_installment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        log::trace!("zero-rate loan, EMI = P / n");
        return principal / months;
    }

    let log_growth = months * monthly_rate.ln_1p();
    let discounted_share = -(-log_growth).exp_m1();
    principal * monthly_rate / discounted_share
}

/// EMI for a validated loan
pub fn calculate_emi(loan: &LoanParameters) -> EmiResult {
    let months = loan.total_months();
    let emi = monthly_installment(loan.principal(), loan.monthly_rate(), months);
    let total_payment = emi * months;

    log::debug!(
        "EMI for principal {:.2} at {}% over {} months: {:.4}",
        loan.principal(),
        loan.annual_rate_percent(),
        months,
        emi
    );

    EmiResult {
        emi,
        principal: loan.principal(),
        total_months: months,
        total_payment,
        total_interest: total_payment - loan.principal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn loan(p: f64, rate: f64, years: f64) -> LoanParameters {
        LoanParameters::new(p, rate, years).unwrap()
    }

    #[test]
    fn test_reference_loan() {
        // 1 lakh at 8.5% for 5 years
        let result = calculate_emi(&loan(100_000.0, 8.5, 5.0));
        assert_relative_eq!(result.emi, 2051.6531, epsilon = 1e-3);
        assert_relative_eq!(result.total_payment, result.emi * 60.0);
        assert!(result.total_interest > 0.0);
    }

    #[test]
    fn test_zero_rate_is_exact() {
        for (p, years) in [(100_000.0, 5.0), (12_345.67, 3.0), (1.0, 0.5), (999_999.0, 30.0)] {
            let result = calculate_emi(&loan(p, 0.0, years));
            assert_eq!(result.emi, p / (years * 12.0));
        }
    }

    #[test]
    fn test_tiny_rate_matches_zero_rate_limit() {
        let near_zero = monthly_installment(120_000.0, 1e-12, 120.0);
        assert_relative_eq!(near_zero, 1_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_total_repayment_never_below_principal() {
        for p in [1_000.0, 250_000.0, 5_000_000.0] {
            for rate in [0.0, 0.01, 1.0, 8.5, 24.0, 60.0] {
                for years in [0.5, 1.0, 7.0, 30.0] {
                    let result = calculate_emi(&loan(p, rate, years));
                    let months = years * 12.0;
                    // tolerate the last ulp on the zero-rate path
                    assert!(
                        months * result.emi >= p * (1.0 - 1e-12),
                        "n*EMI < P for p={} rate={} years={}",
                        p,
                        rate,
                        years
                    );
                }
            }
        }
    }

    #[test]
    fn test_long_tenure_high_rate_stays_finite() {
        // n·ln(1+r) far above the f64 exp range
        for (rate, years) in [(36.0, 2_500.0), (1_000.0, 100.0)] {
            let result = calculate_emi(&loan(100_000.0, rate, years));
            let interest_only = 100_000.0 * rate / 1200.0;
            assert!(result.emi.is_finite());
            assert!(result.total_payment.is_finite());
            assert!(result.total_interest.is_finite());
            assert_relative_eq!(result.emi, interest_only, max_relative = 1e-12);
            assert!(result.total_payment >= 100_000.0);
        }
    }

    #[test]
    fn test_emi_increases_with_rate() {
        let low = calculate_emi(&loan(500_000.0, 7.0, 20.0)).emi;
        let high = calculate_emi(&loan(500_000.0, 9.0, 20.0)).emi;
        assert!(high > low);
    }
}
