//! Income/expense totals over a user's transactions

use crate::format::format_inr;
use serde::{Deserialize, Serialize};

/// Number of recent expenses included in a summary
pub const RECENT_EXPENSE_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income less expenses; negative when overspent
    pub balance: f64,
    /// First expenses in the order given, as (category, amount)
    pub recent_expenses: Vec<(String, f64)>,
}

impl TransactionSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total_for = |kind: TransactionKind| -> f64 {
            transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let total_income = total_for(TransactionKind::Income);
        let total_expenses = total_for(TransactionKind::Expense);

        let recent_expenses = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .take(RECENT_EXPENSE_LIMIT)
            .map(|t| (t.category.clone(), t.amount))
            .collect();

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            recent_expenses,
        }
    }

    /// Plain-text block describing the totals, for inclusion in an assistant prompt
    pub fn describe(&self) -> String {
        let recent: Vec<String> = self
            .recent_expenses
            .iter()
            .map(|(category, amount)| format!("{} {}", category, format_inr(*amount)))
            .collect();

        format!(
            "- Total Income: {}\n- Total Expenses: {}\n- Balance/Savings: {}\n- Recent expenses: {}",
            format_inr(self.total_income),
            format_inr(self.total_expenses),
            format_inr(self.balance),
            if recent.is_empty() { "none".to_string() } else { recent.join(", ") }
        )
    }
}
