use chrono::NaiveDate;
use serde::Serialize;

use crate::budget::{ExpenseLimit, SavingsGoal, Transaction};

/// Spend accumulated against a limit within its current window.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LimitStatus {
    pub spent: f64,
    pub percentage: f64,
}

impl LimitStatus {
    pub fn is_over_limit(&self) -> bool {
        self.percentage > 100.0
    }

    /// Over-limit takes display precedence; this stays true past 100%.
    pub fn is_near_limit(&self) -> bool {
        self.percentage > 80.0
    }
}

/// Sums this category's expenses since the limit window opened.
pub fn limit_status(
    limit: &ExpenseLimit,
    transactions: &[Transaction],
    today: NaiveDate,
) -> LimitStatus {
    let start = limit.period.start(today);
    let spent: f64 = transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == limit.category && t.date >= start)
        .map(|t| t.amount)
        .sum();
    LimitStatus {
        spent,
        percentage: spent / limit.amount * 100.0,
    }
}

/// Progress toward a goal relative to today.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatus {
    pub progress: f64,
    /// Negative once the target date has passed.
    pub days_remaining: i64,
}

impl GoalStatus {
    /// Completion depends on progress only, not on the target date.
    pub fn is_completed(&self) -> bool {
        self.progress >= 100.0
    }

    pub fn is_overdue(&self) -> bool {
        self.days_remaining < 0
    }
}

pub fn goal_status(goal: &SavingsGoal, today: NaiveDate) -> GoalStatus {
    GoalStatus {
        progress: goal.current_amount / goal.target_amount * 100.0,
        days_remaining: (goal.target_date - today).num_days(),
    }
}

/// Suggested saving pace to reach a goal by its target date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SavingsPace {
    pub remaining: f64,
    /// Amount to put aside per day; zero once the target date has passed.
    pub daily: f64,
    /// Daily pace over a 30-day month.
    pub monthly: f64,
}

pub fn savings_pace(goal: &SavingsGoal, today: NaiveDate) -> SavingsPace {
    let days_remaining = (goal.target_date - today).num_days();
    let remaining = goal.target_amount - goal.current_amount;
    let daily = if days_remaining > 0 {
        remaining / days_remaining as f64
    } else {
        0.0
    };
    let monthly = daily * 30.0;
    SavingsPace {
        remaining,
        daily: daily.max(0.0),
        monthly: monthly.max(0.0),
    }
}
