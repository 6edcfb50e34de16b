use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurring window an expense limit resets over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LimitPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl LimitPeriod {
    /// Start of the window containing `today`. Weekly windows begin on the
    /// most recent Sunday.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            LimitPeriod::Daily => today,
            LimitPeriod::Weekly => {
                today - Duration::days(today.weekday().num_days_from_sunday() as i64)
            }
            LimitPeriod::Monthly => today.with_day(1).unwrap_or(today),
        }
    }
}

/// A recurring spending ceiling for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseLimit {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub period: LimitPeriod,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct ExpenseLimitInput {
    pub category: String,
    pub amount: f64,
    pub period: LimitPeriod,
    pub currency: String,
}

impl ExpenseLimit {
    /// Constructs a limit with a fresh id. Amounts are taken as given; the
    /// calling layer owns numeric validation.
    pub fn new(input: ExpenseLimitInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: input.category,
            amount: input.amount,
            period: input.period,
            currency: input.currency,
        }
    }

    /// Replaces every caller-editable field, keeping the id.
    pub fn apply(&mut self, input: ExpenseLimitInput) {
        self.category = input.category;
        self.amount = input.amount;
        self.period = input.period;
        self.currency = input.currency;
    }
}
