//! Pure aggregation functions over the budget document.
//!
//! Every function takes an explicit `today` reference date so callers pass
//! `Local::now().date_naive()` and tests pin the clock.

pub mod period;
pub mod status;
pub mod summary;

pub use period::SummaryPeriod;
pub use status::{goal_status, limit_status, savings_pace, GoalStatus, LimitStatus, SavingsPace};
pub use summary::{category_breakdown, financial_summary, CategoryTotal, FinancialSummary};
