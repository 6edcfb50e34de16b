//! Budget domain models: the persisted document and its record types.

pub mod data;
pub mod goal;
pub mod limit;
pub mod transaction;

pub use data::BudgetData;
pub use goal::{SavingsGoal, SavingsGoalInput};
pub use limit::{ExpenseLimit, ExpenseLimitInput, LimitPeriod};
pub use transaction::{Transaction, TransactionInput, TransactionKind};

/// Category vocabulary offered to UI collaborators for new records. Free-form
/// categories are still accepted everywhere.
pub const DEFAULT_INCOME_CATEGORIES: &[&str] =
    &["Salary", "Freelance", "Investment", "Gift", "Other"];

pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Health",
    "Education",
    "Other",
];
