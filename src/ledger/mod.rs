//! Aggregates handed to the external assistant: transaction totals and the
//! per-user daily prompt allowance
//!
//! Storage of transactions and quota state belongs to the caller; these types
//! only compute over values passed in.

mod summary;
mod quota;

pub use summary::{Transaction, TransactionKind, TransactionSummary, RECENT_EXPENSE_LIMIT};
pub use quota::{PromptQuota, QuotaExceeded, DAILY_PROMPT_LIMIT};
