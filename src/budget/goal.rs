use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A target amount to accumulate by a target date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct SavingsGoalInput {
    pub title: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub currency: String,
}

impl SavingsGoal {
    /// Constructs a goal with a fresh id. Progress always starts at zero
    /// regardless of what the caller tracked elsewhere.
    pub fn new(input: SavingsGoalInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            target_amount: input.target_amount,
            current_amount: 0.0,
            target_date: input.target_date,
            currency: input.currency,
        }
    }

    /// Replaces every caller-editable field, keeping the id and accumulated
    /// progress.
    pub fn apply(&mut self, input: SavingsGoalInput) {
        self.title = input.title;
        self.target_amount = input.target_amount;
        self.target_date = input.target_date;
        self.currency = input.currency;
    }
}
