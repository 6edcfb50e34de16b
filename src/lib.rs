#![doc(test(attr(deny(warnings))))]

//! Budget Tracker offers the persistence and aggregation primitives behind a
//! personal budget: an income/expense transaction log, expense limits, savings
//! goals, and the derived financial metrics UI layers render from them.

pub mod analytics;
pub mod budget;
pub mod currency;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_tracker=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
