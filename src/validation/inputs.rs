//! Raw calculator forms as typed in by a user
//!
//! Every field is kept as text so a half-typed or non-numeric value can be held
//! without error; `validate` turns a form into its parameter record.

use super::parse::{parse_number, parse_whole, parse_whole_or_zero};
use super::Validate;
use crate::error::{ErrorCollector, ValidationErrors};
use crate::params::{
    self, CompoundingFrequency, FixedDepositParameters, LoanParameters, RatioParameters,
    RecurringDepositParameters, RetirementParameters, SipParameters,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Accept either `"8.5"` or `8.5` for a raw field in JSON
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawField::deserialize(deserializer)? {
        RawField::Text(s) => s,
        RawField::Number(n) => n.to_string(),
    })
}

/// Loan EMI form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    #[serde(deserialize_with = "text_or_number")]
    pub principal: String,
    #[serde(deserialize_with = "text_or_number")]
    pub annual_rate_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub tenure_years: String,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self {
            principal: "100000".into(),
            annual_rate_percent: "8.5".into(),
            tenure_years: "5".into(),
        }
    }
}

impl Validate for LoanInput {
    type Params = LoanParameters;

    fn validate(&self) -> Result<LoanParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let principal = c.take(parse_number("principal", &self.principal));
        let rate = c.take(parse_number("annual_rate_percent", &self.annual_rate_percent));
        let tenure = c.take(parse_number("tenure_years", &self.tenure_years));

        params::check_loan(&mut c, principal, rate, tenure);
        let built = (|| Some(LoanParameters::from_checked(principal?, rate?, tenure?)))();
        c.finish(built)
    }
}

/// SIP form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipInput {
    #[serde(deserialize_with = "text_or_number")]
    pub monthly_investment: String,
    #[serde(deserialize_with = "text_or_number")]
    pub annual_return_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub duration_years: String,
}

impl Default for SipInput {
    fn default() -> Self {
        Self {
            monthly_investment: "5000".into(),
            annual_return_percent: "12".into(),
            duration_years: "10".into(),
        }
    }
}

impl Validate for SipInput {
    type Params = SipParameters;

    fn validate(&self) -> Result<SipParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let investment = c.take(parse_number("monthly_investment", &self.monthly_investment));
        let rate = c.take(parse_number("annual_return_percent", &self.annual_return_percent));
        let duration = c.take(parse_number("duration_years", &self.duration_years));

        params::check_sip(&mut c, investment, rate, duration);
        let built = (|| Some(SipParameters::from_checked(investment?, rate?, duration?)))();
        c.finish(built)
    }
}

/// Fixed deposit form; the frequency is a drop-down, stored as its period count or name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDepositInput {
    #[serde(deserialize_with = "text_or_number")]
    pub principal: String,
    #[serde(deserialize_with = "text_or_number")]
    pub annual_rate_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub tenure_years: String,
    #[serde(deserialize_with = "text_or_number")]
    pub compounding_frequency: String,
}

impl Default for FixedDepositInput {
    fn default() -> Self {
        Self {
            principal: "50000".into(),
            annual_rate_percent: "6.5".into(),
            tenure_years: "3".into(),
            compounding_frequency: "4".into(),
        }
    }
}

impl Validate for FixedDepositInput {
    type Params = FixedDepositParameters;

    fn validate(&self) -> Result<FixedDepositParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let principal = c.take(parse_number("principal", &self.principal));
        let rate = c.take(parse_number("annual_rate_percent", &self.annual_rate_percent));
        let tenure = c.take(parse_number("tenure_years", &self.tenure_years));
        let frequency = match self.compounding_frequency.parse::<CompoundingFrequency>() {
            Ok(f) => Some(f),
            Err(_) => {
                c.push("compounding_frequency", "Must be one of 1, 2, 4 or 12");
                None
            }
        };

        params::check_fixed_deposit(&mut c, principal, rate, tenure);
        let built = (|| Some(FixedDepositParameters::from_checked(principal?, rate?, tenure?, frequency?)))();
        c.finish(built)
    }
}

/// Recurring deposit form; tenure is entered as years plus extra months
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringDepositInput {
    #[serde(deserialize_with = "text_or_number")]
    pub monthly_amount: String,
    #[serde(deserialize_with = "text_or_number")]
    pub annual_rate_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub tenure_years: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub tenure_months: String,
}

impl Default for RecurringDepositInput {
    fn default() -> Self {
        Self {
            monthly_amount: "2000".into(),
            annual_rate_percent: "6".into(),
            tenure_years: "5".into(),
            tenure_months: "0".into(),
        }
    }
}

impl Validate for RecurringDepositInput {
    type Params = RecurringDepositParameters;

    fn validate(&self) -> Result<RecurringDepositParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let amount = c.take(parse_number("monthly_amount", &self.monthly_amount));
        let rate = c.take(parse_number("annual_rate_percent", &self.annual_rate_percent));
        let years = c.take(parse_whole_or_zero("tenure_years", &self.tenure_years));
        let months = c.take(parse_whole_or_zero("tenure_months", &self.tenure_months));
        let total = years
            .zip(months)
            .and_then(|(y, m)| y.checked_mul(12).and_then(|ym| ym.checked_add(m)));
        if years.is_some() && months.is_some() && total.is_none() {
            c.push("total_months", "Tenure must be between 6 months and 10 years");
        }

        params::check_recurring_deposit(&mut c, amount, rate, total);
        let built = (|| Some(RecurringDepositParameters::from_checked(amount?, rate?, total?)))();
        c.finish(built)
    }
}

/// Retirement planning form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementInput {
    #[serde(deserialize_with = "text_or_number")]
    pub current_age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub retirement_age: String,
    #[serde(deserialize_with = "text_or_number")]
    pub life_expectancy: String,
    #[serde(deserialize_with = "text_or_number")]
    pub post_retirement_return_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub current_annual_expense: String,
}

impl Default for RetirementInput {
    fn default() -> Self {
        Self {
            current_age: "24".into(),
            retirement_age: "55".into(),
            life_expectancy: "65".into(),
            post_retirement_return_percent: "12".into(),
            current_annual_expense: "100000".into(),
        }
    }
}

impl Validate for RetirementInput {
    type Params = RetirementParameters;

    fn validate(&self) -> Result<RetirementParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let current = c.take(parse_whole("current_age", &self.current_age));
        let retirement = c.take(parse_whole("retirement_age", &self.retirement_age));
        let life = c.take(parse_whole("life_expectancy", &self.life_expectancy));
        let ret_pct = c.take(parse_number("post_retirement_return_percent", &self.post_retirement_return_percent));
        let expense = c.take(parse_number("current_annual_expense", &self.current_annual_expense));

        params::check_retirement(&mut c, current, retirement, life, ret_pct, expense);
        let built = (|| {
            Some(RetirementParameters::from_checked(current?, retirement?, life?, ret_pct?, expense?))
        })();
        c.finish(built)
    }
}

/// Gold/silver ratio form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioInput {
    #[serde(deserialize_with = "text_or_number")]
    pub price_a: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price_b: String,
}

impl Default for RatioInput {
    fn default() -> Self {
        Self {
            price_a: "2300".into(),
            price_b: "28".into(),
        }
    }
}

impl Validate for RatioInput {
    type Params = RatioParameters;

    fn validate(&self) -> Result<RatioParameters, ValidationErrors> {
        let mut c = ErrorCollector::new();
        let a = c.take(parse_number("price_a", &self.price_a));
        let b = c.take(parse_number("price_b", &self.price_b));

        params::check_ratio(&mut c, a, b);
        let built = (|| Some(RatioParameters::from_checked(a?, b?)))();
        c.finish(built)
    }
}
