//! Validated parameter records, one per instrument
//!
//! Fields are private: a record only exists once its ranges have been checked,
//! either through `new` or through the raw-input validators.

mod loan;
mod savings;
mod retirement;
mod ratio;

pub use loan::LoanParameters;
pub use savings::{
    CompoundingFrequency, FixedDepositParameters, RecurringDepositParameters, SipParameters,
    FD_MAX_TENURE_YEARS, FD_MIN_TENURE_YEARS, RD_MAX_MONTHS, RD_MIN_MONTHS,
};
pub use retirement::RetirementParameters;
pub use ratio::RatioParameters;

pub(crate) use loan::check as check_loan;
pub(crate) use savings::{check_fixed_deposit, check_recurring_deposit, check_sip};
pub(crate) use retirement::check as check_retirement;
pub(crate) use ratio::check as check_ratio;
