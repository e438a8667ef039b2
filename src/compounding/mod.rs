//! Future value of savings instruments: SIPs, fixed deposits and recurring deposits

mod sip;
mod fixed_deposit;
mod recurring_deposit;

pub use sip::{calculate_sip, sip_future_value, SipResult};
pub use fixed_deposit::{calculate_fixed_deposit, effective_annual_yield, FixedDepositResult};
pub use recurring_deposit::{calculate_recurring_deposit, RecurringDepositResult};
