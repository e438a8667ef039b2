//! Daily assistant prompt allowance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prompts a user may send per calendar day
pub const DAILY_PROMPT_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("You have reached your daily limit of {limit} questions. Please try again tomorrow.")]
pub struct QuotaExceeded {
    pub limit: u32,
}

/// Per-user counter that resets when the calendar day changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptQuota {
    pub count: u32,
    pub last_prompt_date: Option<NaiveDate>,
    pub limit: u32,
}

impl Default for PromptQuota {
    fn default() -> Self {
        Self {
            count: 0,
            last_prompt_date: None,
            limit: DAILY_PROMPT_LIMIT,
        }
    }
}

impl PromptQuota {
    /// Prompts already used on `today`
    fn used_on(&self, today: NaiveDate) -> u32 {
        if self.last_prompt_date == Some(today) {
            self.count
        } else {
            0
        }
    }

    pub fn remaining(&self, today: NaiveDate) -> u32 {
        self.limit.saturating_sub(self.used_on(today))
    }

    /// Refuse when the allowance for `today` is spent
    pub fn check(&self, today: NaiveDate) -> Result<(), QuotaExceeded> {
        if self.used_on(today) >= self.limit {
            Err(QuotaExceeded { limit: self.limit })
        } else {
            Ok(())
        }
    }

    /// Count one prompt on `today`, after a successful assistant call
    pub fn record(&mut self, today: NaiveDate) -> Result<(), QuotaExceeded> {
        self.check(today)?;
        self.count = self.used_on(today) + 1;
        self.last_prompt_date = Some(today);
        Ok(())
    }
}
