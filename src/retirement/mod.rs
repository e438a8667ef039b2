//! Retirement planning: inflated expenses, required corpus and monthly saving
//!
//! # Method
//!
//! 1. Today's annual expense is inflated to the retirement date.
//! 2. The corpus is the present value, at retirement, of that expense paid every
//!    year of retirement, discounted at the real (inflation-adjusted) return.
//! 3. The monthly saving is the level end-of-month contribution that grows to the
//!    corpus at the nominal return compounded monthly.
//!
//! Both annuity steps fall back to their zero-rate limits when the rate is within
//! [`Assumptions`](crate::Assumptions) thresholds of zero.

mod annuity;
mod projection;

pub use annuity::AnnuityCalculator;
pub use projection::{project_retirement, project_retirement_with, RetirementResult};
