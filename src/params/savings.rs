//! Parameters for SIPs, fixed deposits and recurring deposits

use crate::error::{ErrorCollector, ValidationErrors};
use crate::validation::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shortest fixed deposit tenure accepted, in years
pub const FD_MIN_TENURE_YEARS: f64 = 1.0;
/// Longest fixed deposit tenure accepted, in years
pub const FD_MAX_TENURE_YEARS: f64 = 50.0;
/// Shortest recurring deposit, in months
pub const RD_MIN_MONTHS: u32 = 6;
/// Longest recurring deposit, in months (10 years)
pub const RD_MAX_MONTHS: u32 = 120;

/// Systematic investment plan: level monthly contribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipParameters {
    monthly_investment: f64,
    annual_return_percent: f64,
    duration_years: f64,
}

impl SipParameters {
    pub fn new(monthly_investment: f64, annual_return_percent: f64, duration_years: f64) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check_sip(&mut c, Some(monthly_investment), Some(annual_return_percent), Some(duration_years));
        c.finish(Some(Self::from_checked(monthly_investment, annual_return_percent, duration_years)))
    }

    pub(crate) fn from_checked(monthly_investment: f64, annual_return_percent: f64, duration_years: f64) -> Self {
        Self {
            monthly_investment,
            annual_return_percent,
            duration_years,
        }
    }

    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn annual_return_percent(&self) -> f64 {
        self.annual_return_percent
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_years
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 1200.0
    }

    pub fn total_months(&self) -> f64 {
        self.duration_years * 12.0
    }
}

pub(crate) fn check_sip(c: &mut ErrorCollector, investment: Option<f64>, rate: Option<f64>, duration: Option<f64>) {
    rules::positive(c, "monthly_investment", investment);
    rules::non_negative(c, "annual_return_percent", rate);
    rules::positive(c, "duration_years", duration);
}

/// Interest compounding frequency of a fixed deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingFrequency {
    Yearly,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Yearly,
        CompoundingFrequency::HalfYearly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
    ];

    /// Compounding periods per year (m)
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::HalfYearly => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }

    pub fn from_periods(periods: u32) -> Option<Self> {
        match periods {
            1 => Some(CompoundingFrequency::Yearly),
            2 => Some(CompoundingFrequency::HalfYearly),
            4 => Some(CompoundingFrequency::Quarterly),
            12 => Some(CompoundingFrequency::Monthly),
            _ => None,
        }
    }
}

impl Default for CompoundingFrequency {
    fn default() -> Self {
        CompoundingFrequency::Quarterly
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompoundingFrequency::Yearly => "Yearly",
            CompoundingFrequency::HalfYearly => "Half-Yearly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for CompoundingFrequency {
    type Err = String;

    /// Accepts the period count ("1", "2", "4", "12") or a name ("quarterly", "half-yearly", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(periods) = s.parse::<u32>() {
            return Self::from_periods(periods).ok_or_else(|| format!("Unsupported frequency: {}", periods));
        }
        match s.replace(['-', '_', ' '], "").as_str() {
            "yearly" | "annually" | "annual" => Ok(CompoundingFrequency::Yearly),
            "halfyearly" | "semiannually" | "semiannual" => Ok(CompoundingFrequency::HalfYearly),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "monthly" => Ok(CompoundingFrequency::Monthly),
            other => Err(format!("Unknown frequency: {}", other)),
        }
    }
}

/// Fixed deposit: lump sum compounded m times a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedDepositParameters {
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: f64,
    frequency: CompoundingFrequency,
}

impl FixedDepositParameters {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: f64,
        frequency: CompoundingFrequency,
    ) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check_fixed_deposit(&mut c, Some(principal), Some(annual_rate_percent), Some(tenure_years));
        c.finish(Some(Self::from_checked(principal, annual_rate_percent, tenure_years, frequency)))
    }

    pub(crate) fn from_checked(
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: f64,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
            frequency,
        }
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn tenure_years(&self) -> f64 {
        self.tenure_years
    }

    pub fn frequency(&self) -> CompoundingFrequency {
        self.frequency
    }
}

pub(crate) fn check_fixed_deposit(c: &mut ErrorCollector, principal: Option<f64>, rate: Option<f64>, tenure: Option<f64>) {
    rules::positive(c, "principal", principal);
    rules::non_negative(c, "annual_rate_percent", rate);
    rules::within(
        c,
        "tenure_years",
        tenure,
        FD_MIN_TENURE_YEARS,
        FD_MAX_TENURE_YEARS,
        "Tenure must be 1-50 years",
    );
}

/// Recurring deposit: level monthly deposit for a whole number of months
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecurringDepositParameters {
    monthly_amount: f64,
    annual_rate_percent: f64,
    total_months: u32,
}

impl RecurringDepositParameters {
    pub fn new(monthly_amount: f64, annual_rate_percent: f64, total_months: u32) -> Result<Self, ValidationErrors> {
        let mut c = ErrorCollector::new();
        check_recurring_deposit(&mut c, Some(monthly_amount), Some(annual_rate_percent), Some(total_months));
        c.finish(Some(Self::from_checked(monthly_amount, annual_rate_percent, total_months)))
    }

    pub(crate) fn from_checked(monthly_amount: f64, annual_rate_percent: f64, total_months: u32) -> Self {
        Self {
            monthly_amount,
            annual_rate_percent,
            total_months,
        }
    }

    pub fn monthly_amount(&self) -> f64 {
        self.monthly_amount
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }
}

pub(crate) fn check_recurring_deposit(c: &mut ErrorCollector, amount: Option<f64>, rate: Option<f64>, months: Option<u32>) {
    rules::positive(c, "monthly_amount", amount);
    rules::non_negative(c, "annual_rate_percent", rate);
    if let Some(n) = months {
        c.require(
            (RD_MIN_MONTHS..=RD_MAX_MONTHS).contains(&n),
            "total_months",
            "Tenure must be between 6 months and 10 years",
        );
    }
}
