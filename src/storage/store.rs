use tracing::{debug, warn};
use uuid::Uuid;

use crate::budget::{
    BudgetData, ExpenseLimit, ExpenseLimitInput, SavingsGoal, SavingsGoalInput, Transaction,
    TransactionInput,
};
use crate::errors::Result;

use super::{JsonStorage, StorageBackend};

/// Facade over the persisted budget document.
///
/// Consumers receive a store by reference instead of reaching for global
/// state, and every mutation runs a single load-mutate-save cycle behind one
/// method. Storage failures never escape: loads degrade to the all-defaults
/// document and failed saves are logged and dropped, leaving prior stored
/// content unchanged.
///
/// The cycle itself is unsynchronized. That is sound for the single-threaded
/// callers this core serves; a concurrent port must serialize callers around
/// these methods to keep the last-writer-wins contract from losing updates.
pub struct BudgetStore {
    backend: Box<dyn StorageBackend>,
}

impl BudgetStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Opens a store over the default file-backed storage location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Box::new(JsonStorage::new_default()?)))
    }

    /// Loads the current document. Read failures and malformed content both
    /// degrade to the all-defaults document.
    pub fn load(&self) -> BudgetData {
        match self.backend.load() {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, "failed to load budget document, using defaults");
                BudgetData::default()
            }
        }
    }

    fn persist(&self, data: &BudgetData) {
        if let Err(err) = self.backend.save(data) {
            warn!(error = %err, "failed to save budget document");
        }
    }

    fn mutate<T>(&self, apply: impl FnOnce(&mut BudgetData) -> T) -> T {
        let mut data = self.load();
        let result = apply(&mut data);
        self.persist(&data);
        result
    }

    /// Creates a transaction and prepends it to the log (newest first).
    /// Amounts are taken as given; the calling layer owns validation.
    pub fn add_transaction(&self, input: TransactionInput) -> Transaction {
        let transaction = Transaction::new(input);
        let created = transaction.clone();
        self.mutate(|data| data.add_transaction(transaction));
        debug!(id = %created.id, "transaction added");
        created
    }

    /// Deletes the transaction with the given id. Unknown ids are a no-op.
    pub fn delete_transaction(&self, id: Uuid) {
        self.mutate(|data| data.remove_transaction(id));
        debug!(%id, "transaction deleted");
    }

    pub fn update_currency(&self, code: impl Into<String>) {
        let code = code.into();
        self.mutate(|data| data.currency = code);
    }

    pub fn update_monthly_budget(&self, amount: f64) {
        self.mutate(|data| data.monthly_budget = amount);
    }

    pub fn add_expense_limit(&self, input: ExpenseLimitInput) -> ExpenseLimit {
        let limit = ExpenseLimit::new(input);
        let created = limit.clone();
        self.mutate(|data| data.add_expense_limit(limit));
        debug!(id = %created.id, "expense limit added");
        created
    }

    /// Rewrites an existing limit. Returns false when the id is unknown.
    pub fn update_expense_limit(&self, id: Uuid, input: ExpenseLimitInput) -> bool {
        self.mutate(|data| data.update_expense_limit(id, input))
    }

    pub fn remove_expense_limit(&self, id: Uuid) {
        self.mutate(|data| data.remove_expense_limit(id));
    }

    pub fn add_savings_goal(&self, input: SavingsGoalInput) -> SavingsGoal {
        let goal = SavingsGoal::new(input);
        let created = goal.clone();
        self.mutate(|data| data.add_savings_goal(goal));
        debug!(id = %created.id, "savings goal added");
        created
    }

    /// Rewrites an existing goal, preserving its accumulated progress.
    /// Returns false when the id is unknown.
    pub fn update_savings_goal(&self, id: Uuid, input: SavingsGoalInput) -> bool {
        self.mutate(|data| data.update_savings_goal(id, input))
    }

    pub fn remove_savings_goal(&self, id: Uuid) {
        self.mutate(|data| data.remove_savings_goal(id));
    }

    /// Sets the accumulated amount on a goal. Returns false when the id is
    /// unknown.
    pub fn set_goal_progress(&self, id: Uuid, amount: f64) -> bool {
        self.mutate(|data| data.set_goal_progress(id, amount))
    }
}
