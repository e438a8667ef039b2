//! Corpus and saving projection for a retirement plan

use super::annuity::AnnuityCalculator;
use crate::assumptions::Assumptions;
use crate::params::RetirementParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Corpus needed on the retirement date
    pub corpus: f64,
    /// Level monthly saving from today until retirement
    pub monthly_saving: f64,
    /// Today's annual expense inflated to the retirement date
    pub annual_expense_at_retirement: f64,
    pub years_to_retirement: u32,
    pub years_in_retirement: u32,
    /// (1 + nominal) / (1 + inflation) − 1
    pub real_return_rate: f64,
}

/// Project with the default 6% inflation
pub fn project_retirement(plan: &RetirementParameters) -> RetirementResult {
    project_retirement_with(plan, &Assumptions::default())
}

pub fn project_retirement_with(plan: &RetirementParameters, assumptions: &Assumptions) -> RetirementResult {
    let years_to_retirement = plan.years_to_retirement();
    let years_in_retirement = plan.years_in_retirement();
    let inflation = assumptions.inflation_rate;
    let nominal = plan.return_rate();

    let annual_expense_at_retirement =
        plan.current_annual_expense() * (1.0 + inflation).powi(years_to_retirement as i32);

    let real_return_rate = (1.0 + nominal) / (1.0 + inflation) - 1.0;
    let corpus = AnnuityCalculator::pv_ordinary(
        annual_expense_at_retirement,
        years_in_retirement,
        real_return_rate,
        assumptions.real_return_epsilon,
    );

    let monthly_rate = nominal / 12.0;
    let months = years_to_retirement * 12;
    let monthly_saving = AnnuityCalculator::sinking_fund_payment(
        corpus,
        months,
        monthly_rate,
        assumptions.monthly_rate_epsilon,
    );

    log::debug!(
        "retirement in {}y lasting {}y: expense {:.2}, corpus {:.2}, saving {:.2}/month",
        years_to_retirement,
        years_in_retirement,
        annual_expense_at_retirement,
        corpus,
        monthly_saving
    );

    RetirementResult {
        corpus,
        monthly_saving,
        annual_expense_at_retirement,
        years_to_retirement,
        years_in_retirement,
        real_return_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plan(current: u32, retire: u32, life: u32, ret_pct: f64, expense: f64) -> RetirementParameters {
        RetirementParameters::new(current, retire, life, ret_pct, expense).unwrap()
    }

    #[test]
    fn test_reference_plan() {
        let result = project_retirement(&plan(24, 55, 65, 12.0, 100_000.0));

        assert_eq!(result.years_to_retirement, 31);
        assert_eq!(result.years_in_retirement, 10);
        assert_relative_eq!(result.annual_expense_at_retirement, 608_810.06, epsilon = 0.01);
        assert_relative_eq!(result.real_return_rate, 1.12 / 1.06 - 1.0);
        assert_relative_eq!(result.corpus, 4_553_885.78, epsilon = 0.01);
        assert_relative_eq!(result.monthly_saving, 1_152.62, epsilon = 0.01);
    }

    #[test]
    fn test_results_are_internally_consistent() {
        let p = plan(24, 55, 65, 12.0, 100_000.0);
        let result = project_retirement(&p);

        // Corpus funds every inflated withdrawal at the real rate
        let discounted: f64 = (1..=result.years_in_retirement as i32)
            .map(|t| result.annual_expense_at_retirement / (1.0 + result.real_return_rate).powi(t))
            .sum();
        assert_relative_eq!(result.corpus, discounted, max_relative = 1e-10);

        // Monthly saving accumulates to the corpus at the nominal monthly rate
        let accumulated = AnnuityCalculator::fv_ordinary(result.monthly_saving, 31 * 12, 0.01);
        assert_relative_eq!(accumulated, result.corpus, max_relative = 1e-10);
    }

    #[test]
    fn test_return_equal_to_inflation_uses_undiscounted_corpus() {
        let result = project_retirement(&plan(30, 60, 80, 6.0, 200_000.0));
        assert!(result.real_return_rate.abs() < 1e-12);
        assert_relative_eq!(result.corpus, result.annual_expense_at_retirement * 20.0);
    }

    #[test]
    fn test_zero_return_saves_corpus_evenly() {
        let result = project_retirement(&plan(40, 60, 75, 0.0, 120_000.0));
        // Real return is negative, so the annuity formula applies to the corpus
        assert!(result.real_return_rate < 0.0);
        assert!(result.corpus > result.annual_expense_at_retirement * 15.0);
        assert_relative_eq!(result.monthly_saving, result.corpus / 240.0);
    }

    #[test]
    fn test_strictly_increasing_in_current_expense() {
        let base = plan(24, 55, 65, 12.0, 100_000.0);
        let mut prev = project_retirement(&base);
        for expense in [100_001.0, 150_000.0, 500_000.0, 2_000_000.0] {
            let next = project_retirement(&base.with_current_annual_expense(expense).unwrap());
            assert!(next.corpus > prev.corpus);
            assert!(next.annual_expense_at_retirement > prev.annual_expense_at_retirement);
            prev = next;
        }
    }

    #[test]
    fn test_custom_inflation() {
        let p = plan(24, 55, 65, 12.0, 100_000.0);
        let low = project_retirement_with(
            &p,
            &Assumptions {
                inflation_rate: 0.04,
                ..Assumptions::default()
            },
        );
        let default = project_retirement(&p);
        assert!(low.annual_expense_at_retirement < default.annual_expense_at_retirement);
        assert!(low.corpus < default.corpus);
    }

    #[test]
    fn test_all_outputs_positive() {
        for ret_pct in [0.0, 3.0, 6.0, 12.0, 20.0] {
            let result = project_retirement(&plan(18, 70, 100, ret_pct, 1.0));
            assert!(result.corpus > 0.0);
            assert!(result.monthly_saving > 0.0);
            assert!(result.annual_expense_at_retirement > 0.0);
        }
    }
}
