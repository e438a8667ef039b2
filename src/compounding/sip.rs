//! Systematic investment plan future value

use crate::params::SipParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub future_value: f64,
    /// Monthly investment x number of months
    pub total_invested: f64,
    /// Future value less amount invested
    pub estimated_returns: f64,
}

/// Future value of an annuity-due: contributions at the start of each month
///
/// FV = P·[((1+i)^n − 1)/i]·(1+i), with FV = P·n when i = 0.
pub fn sip_future_value(monthly_investment: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0.0 {
        log::trace!("zero-return SIP, FV = P * n");
        return monthly_investment * months;
    }

    let growth_minus_one = (months * monthly_rate.ln_1p()).exp_m1();
    monthly_investment * (growth_minus_one / monthly_rate) * (1.0 + monthly_rate)
}

pub fn calculate_sip(sip: &SipParameters) -> SipResult {
    let months = sip.total_months();
    let future_value = sip_future_value(sip.monthly_investment(), sip.monthly_rate(), months);
    let total_invested = sip.monthly_investment() * months;

    log::debug!(
        "SIP of {:.2}/month at {}% for {} years: FV {:.2}",
        sip.monthly_investment(),
        sip.annual_return_percent(),
        sip.duration_years(),
        future_value
    );

    SipResult {
        future_value,
        total_invested,
        estimated_returns: future_value - total_invested,
    }
}
