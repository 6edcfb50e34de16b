use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single dated income or expense entry. Immutable once created; the only
/// lifecycle operation after construction is delete-by-id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    /// Creation instant in epoch milliseconds.
    pub timestamp: i64,
}

/// Caller-supplied fields for a new transaction. The id and creation
/// timestamp are generated at construction.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(input: TransactionInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: input.kind,
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense)
    }
}
