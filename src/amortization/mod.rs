//! Loan amortization: level monthly installment (EMI) and payoff schedule

mod emi;
mod schedule;

pub use emi::{calculate_emi, monthly_installment, EmiResult};
pub use schedule::{schedule, AmortizationSchedule, ScheduleRow, ScheduleSummary, MAX_SCHEDULE_MONTHS};
