//! Month-by-month payoff schedule for an amortizing loan

use super::emi::monthly_installment;
use crate::error::CalcError;
use crate::params::LoanParameters;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Balances below this are treated as fully repaid
const PAID_OFF_TOLERANCE: f64 = 1e-6;

/// Longest schedule that will be built (10,000 years of installments)
pub const MAX_SCHEDULE_MONTHS: u32 = 120_000;

/// One installment of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Complete payoff schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Level installment used for every month but possibly the last
    pub emi: f64,
    pub rows: Vec<ScheduleRow>,
}

/// Totals over the schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
}

impl AmortizationSchedule {
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_paid: self.rows.iter().map(|r| r.payment).sum(),
            total_interest: self.rows.iter().map(|r| r.interest).sum(),
            total_principal: self.rows.iter().map(|r| r.principal).sum(),
        }
    }

    /// Write the rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), CalcError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Build the payoff schedule
///
/// Interest accrues on the opening balance at the monthly rate. The last row
/// repays whatever balance remains, so a fractional tenure ends with a smaller
/// final installment. Tenures above [`MAX_SCHEDULE_MONTHS`] are refused
/// before any row is built.
pub fn schedule(loan: &LoanParameters) -> Result<AmortizationSchedule, CalcError> {
    let rate = loan.monthly_rate();
    let months = loan.total_months();
    let installments = months.ceil();
    if installments > MAX_SCHEDULE_MONTHS as f64 {
        return Err(CalcError::ScheduleTooLong {
            months,
            max: MAX_SCHEDULE_MONTHS,
        });
    }
    let installments = installments as u32;
    let emi = monthly_installment(loan.principal(), rate, months);

    let mut rows = Vec::new();
    let mut balance = loan.principal();

    for month in 1..=installments {
        let interest = balance * rate;
        let is_last = month == installments;
        let principal_part = if is_last {
            balance
        } else {
            (emi - interest).min(balance)
        };

        let mut closing = balance - principal_part;
        if closing.abs() < PAID_OFF_TOLERANCE {
            closing = 0.0;
        }

        rows.push(ScheduleRow {
            month,
            opening_balance: balance,
            payment: interest + principal_part,
            interest,
            principal: principal_part,
            closing_balance: closing,
        });

        balance = closing;
    }

    log::debug!("built {}-month schedule, EMI {:.4}", rows.len(), emi);

    Ok(AmortizationSchedule { emi, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_repays_principal() {
        let loan = LoanParameters::new(100_000.0, 8.5, 5.0).unwrap();
        let sched = schedule(&loan).unwrap();

        assert_eq!(sched.rows.len(), 60);
        assert_eq!(sched.rows.last().unwrap().closing_balance, 0.0);

        let summary = sched.summary();
        assert_relative_eq!(summary.total_principal, 100_000.0, epsilon = 1e-6);
        assert_relative_eq!(summary.total_paid, sched.emi * 60.0, epsilon = 1e-4);
        assert_relative_eq!(summary.total_interest, summary.total_paid - 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rows_chain_balances() {
        let loan = LoanParameters::new(250_000.0, 10.0, 2.0).unwrap();
        let sched = schedule(&loan).unwrap();

        for pair in sched.rows.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
        // Interest share shrinks as the balance falls
        assert!(sched.rows[0].interest > sched.rows[23].interest);
        for row in &sched.rows[..23] {
            assert_relative_eq!(row.payment, sched.emi, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_rate_schedule_is_flat() {
        let loan = LoanParameters::new(12_000.0, 0.0, 1.0).unwrap();
        let sched = schedule(&loan).unwrap();
        assert_eq!(sched.rows.len(), 12);
        for row in &sched.rows {
            assert_eq!(row.interest, 0.0);
            assert_relative_eq!(row.payment, 1_000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fractional_tenure_has_short_final_installment() {
        // 1.25 years = 15 months exactly; 1.3 years = 15.6 months -> 16 rows
        let loan = LoanParameters::new(10_000.0, 12.0, 1.3).unwrap();
        let sched = schedule(&loan).unwrap();
        assert_eq!(sched.rows.len(), 16);
        let last = sched.rows.last().unwrap();
        assert!(last.payment < sched.emi);
        assert_eq!(last.closing_balance, 0.0);
    }

    #[test]
    fn test_long_high_rate_loan_amortizes_gradually() {
        let loan = LoanParameters::new(100_000.0, 36.0, 2_500.0).unwrap();
        let sched = schedule(&loan).unwrap();
        assert_eq!(sched.rows.len(), 30_000);
        assert!(sched.emi.is_finite());

        let first = &sched.rows[0];
        assert!(first.closing_balance > 99_000.0);
        assert!(sched.rows.iter().all(|r| r.payment.is_finite()));
        assert_eq!(sched.rows.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_oversized_tenure_is_refused() {
        let loan = LoanParameters::new(100_000.0, 8.5, 4e8).unwrap();
        match schedule(&loan) {
            Err(CalcError::ScheduleTooLong { months, max }) => {
                assert_eq!(months, 4.8e9);
                assert_eq!(max, MAX_SCHEDULE_MONTHS);
            }
            other => panic!("unexpected {:?}", other.map(|s| s.rows.len())),
        }

        let at_limit = LoanParameters::new(1_000.0, 1.0, MAX_SCHEDULE_MONTHS as f64 / 12.0).unwrap();
        assert_eq!(schedule(&at_limit).unwrap().rows.len(), MAX_SCHEDULE_MONTHS as usize);
    }

    #[test]
    fn test_write_csv() {
        let loan = LoanParameters::new(1_200.0, 0.0, 0.25).unwrap();
        let mut out = Vec::new();
        schedule(&loan).unwrap().write_csv(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("month,opening_balance,payment,interest,principal,closing_balance")
        );
        assert_eq!(lines.count(), 3);
    }
}
