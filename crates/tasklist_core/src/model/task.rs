//! Task record domain model.
//!
//! # Responsibility
//! - Define the single stored entity and its priority scale.
//! - Keep identity and creation time immutable after construction.
//!
//! # Invariants
//! - `id` and `created_at` never change once a record exists.
//! - Only `completed` (toggle) and `text` (edit) are mutable, and only
//!   through `TaskStore`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Session-unique task identifier.
///
/// Allocated monotonically by the store; a deleted task's id is never handed
/// out again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw id value, e.g. one received back from the UI layer.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value for FFI and logging.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered task priority; declaration order is ascending importance.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Key string for low priority.
pub const PRIORITY_LOW: &str = "low";
/// Key string for medium priority.
pub const PRIORITY_MEDIUM: &str = "medium";
/// Key string for high priority.
pub const PRIORITY_HIGH: &str = "high";

impl Priority {
    /// Stable key used by UI selectors and the serialized shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => PRIORITY_LOW,
            Self::Medium => PRIORITY_MEDIUM,
            Self::High => PRIORITY_HIGH,
        }
    }

    /// Parses a priority key (`low|medium|high`), ignoring surrounding
    /// whitespace and ASCII case.
    pub fn parse(value: &str) -> Result<Self, KeyParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(KeyParseError::Empty { kind: "priority" }),
            PRIORITY_LOW => Ok(Self::Low),
            PRIORITY_MEDIUM => Ok(Self::Medium),
            PRIORITY_HIGH => Ok(Self::High),
            _ => Err(KeyParseError::Unsupported {
                kind: "priority",
                value: normalized,
            }),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for selector keys (priority, filter, sort) coming from UI strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    Empty { kind: &'static str },
    Unsupported { kind: &'static str, value: String },
}

impl Display for KeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { kind } => write!(f, "{kind} key cannot be empty"),
            Self::Unsupported { kind, value } => write!(f, "unsupported {kind} key `{value}`"),
        }
    }
}

impl Error for KeyParseError {}

/// The unit of stored work item data.
///
/// Fields are read through accessors so that identity and timestamps stay
/// immutable outside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    text: String,
    completed: bool,
    /// Unix epoch milliseconds.
    created_at: i64,
    priority: Priority,
    category: String,
}

impl TaskRecord {
    /// Creates a pending record. Callers must pass already validated text.
    pub(crate) fn new(
        id: TaskId,
        text: String,
        priority: Priority,
        category: String,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
            priority,
            category,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation time in Unix epoch milliseconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyParseError, Priority, TaskId, TaskRecord};

    #[test]
    fn priority_orders_by_importance() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_parse_normalizes_case_and_whitespace() {
        assert_eq!(Priority::parse(" HIGH ").unwrap(), Priority::High);
        assert_eq!(
            Priority::parse("").unwrap_err(),
            KeyParseError::Empty { kind: "priority" }
        );
        assert!(matches!(
            Priority::parse("urgent"),
            Err(KeyParseError::Unsupported { .. })
        ));
    }

    #[test]
    fn toggle_flips_and_reports_new_state() {
        let mut record = TaskRecord::new(
            TaskId::new(1),
            "walk dog".to_string(),
            Priority::Low,
            "Personal".to_string(),
            0,
        );
        assert!(record.toggle());
        assert!(record.is_completed());
        assert!(!record.toggle());
    }
}
