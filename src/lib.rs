//! fincalc - calculation engine for Indian retail-finance instruments
//!
//! This library provides:
//! - Loan EMI and month-by-month amortization schedules
//! - SIP, fixed deposit and recurring deposit maturity values
//! - Retirement corpus and monthly saving projection
//! - Gold/silver price-ratio advisory
//! - Form validation that turns raw text into checked parameter records
//! - Rupee display formatting (Indian digit grouping, Lakh/Crore tags)
//! - Batch evaluation of JSON requests across threads

pub mod advisory;
pub mod amortization;
pub mod assumptions;
pub mod calculator;
pub mod compounding;
pub mod error;
pub mod format;
pub mod ledger;
pub mod params;
pub mod retirement;
pub mod scenario;
pub mod validation;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use calculator::{evaluate, CalculationOutcome, CalculationRequest, CalculationResult};
pub use error::{CalcError, FieldError, ValidationErrors};
pub use scenario::ScenarioRunner;
pub use validation::{Form, Validate, ValidationState};
