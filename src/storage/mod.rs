pub mod json_backend;
pub mod store;

use crate::{budget::BudgetData, errors::Result};

/// Abstraction over persistence backends holding the single budget document.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<BudgetData>;
    fn save(&self, data: &BudgetData) -> Result<()>;
}

pub use json_backend::JsonStorage;
pub use store::BudgetStore;
