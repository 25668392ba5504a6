//! Core domain logic for the task list.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use config::{TaskListConfig, DEFAULT_CATEGORY, WELCOME_TASK_TEXT};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{KeyParseError, Priority, TaskId, TaskRecord};
pub use model::validation::{
    validate_task_text, ValidationError, MAX_TASK_TEXT_CHARS, MIN_TASK_TEXT_CHARS,
};
pub use query::stats::{stats, TaskStats};
pub use query::view::{collate, view, FilterKey, SortKey};
pub use service::task_list_service::TaskListService;
pub use store::task_store::{Clock, CreateError, StoreError, SystemClock, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
