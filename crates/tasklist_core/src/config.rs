//! Task list configuration.
//!
//! # Responsibility
//! - Hold caller-tunable defaults applied when tasks are created.
//! - Decide whether a fresh store starts with the onboarding task.
//!
//! # Invariants
//! - `Default` reproduces the stock task list behavior.

use crate::model::task::Priority;
use serde::Deserialize;

/// Category assigned when the caller does not pick one.
pub const DEFAULT_CATEGORY: &str = "Personal";
/// Text of the optional onboarding task.
pub const WELCOME_TASK_TEXT: &str = "Welcome to your enhanced Todo app!";

/// Defaults used by `TaskStore` and `TaskListService`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskListConfig {
    /// Priority used by `create_with_defaults`.
    pub default_priority: Priority,
    /// Category used by `create_with_defaults`.
    pub default_category: String,
    /// Seeds a high-priority welcome task into a new store.
    pub seed_welcome_task: bool,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
            default_category: DEFAULT_CATEGORY.to_string(),
            seed_welcome_task: false,
        }
    }
}
