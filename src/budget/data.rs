use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    goal::{SavingsGoal, SavingsGoalInput},
    limit::{ExpenseLimit, ExpenseLimitInput},
    transaction::Transaction,
};

/// The root budget document. Exactly one instance is persisted, under a fixed
/// storage key.
///
/// Every field carries a serde default so a partially-shaped stored document
/// loads by merging present fields over defaults rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetData {
    /// Newest-first insertion order.
    pub transactions: Vec<Transaction>,
    pub monthly_budget: f64,
    pub currency: String,
    pub expense_limits: Vec<ExpenseLimit>,
    pub savings_goals: Vec<SavingsGoal>,
}

impl Default for BudgetData {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            monthly_budget: 0.0,
            currency: "USD".into(),
            expense_limits: Vec::new(),
            savings_goals: Vec::new(),
        }
    }
}

impl BudgetData {
    /// Prepends a transaction, keeping the log newest-first.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        id
    }

    /// Removes the transaction with the given id. Unknown ids are a no-op.
    pub fn remove_transaction(&mut self, id: Uuid) {
        self.transactions.retain(|t| t.id != id);
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add_expense_limit(&mut self, limit: ExpenseLimit) -> Uuid {
        let id = limit.id;
        self.expense_limits.push(limit);
        id
    }

    /// Rewrites the limit with the given id. Returns false when absent.
    pub fn update_expense_limit(&mut self, id: Uuid, input: ExpenseLimitInput) -> bool {
        match self.expense_limits.iter_mut().find(|l| l.id == id) {
            Some(limit) => {
                limit.apply(input);
                true
            }
            None => false,
        }
    }

    pub fn remove_expense_limit(&mut self, id: Uuid) {
        self.expense_limits.retain(|l| l.id != id);
    }

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> Uuid {
        let id = goal.id;
        self.savings_goals.push(goal);
        id
    }

    /// Rewrites the goal with the given id, preserving accumulated progress.
    /// Returns false when absent.
    pub fn update_savings_goal(&mut self, id: Uuid, input: SavingsGoalInput) -> bool {
        match self.savings_goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.apply(input);
                true
            }
            None => false,
        }
    }

    pub fn remove_savings_goal(&mut self, id: Uuid) {
        self.savings_goals.retain(|g| g.id != id);
    }

    /// Sets the accumulated amount on a goal. Returns false when absent.
    pub fn set_goal_progress(&mut self, id: Uuid, amount: f64) -> bool {
        match self.savings_goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => {
                goal.current_amount = amount;
                true
            }
            None => false,
        }
    }
}
