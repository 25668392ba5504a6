//! Task text validation.
//!
//! # Responsibility
//! - Decide whether candidate text may be stored, against a snapshot.
//! - Return the trimmed text ready for storage on success.
//!
//! # Invariants
//! - Rules run in fixed order and the first failure wins.
//! - Validation is pure: same input and snapshot give the same result.

use crate::model::task::{TaskId, TaskRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum accepted length of trimmed task text, in characters.
pub const MIN_TASK_TEXT_CHARS: usize = 3;
/// Maximum accepted length of trimmed task text, in characters.
pub const MAX_TASK_TEXT_CHARS: usize = 100;

/// Recoverable rejection of candidate task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyText,
    TooShort,
    TooLong,
    DuplicateText,
}

impl ValidationError {
    /// Stable machine-readable code for FFI envelopes and logs.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::EmptyText => "empty_text",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::DuplicateText => "duplicate_text",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Task cannot be empty"),
            Self::TooShort => write!(
                f,
                "Task must be at least {MIN_TASK_TEXT_CHARS} characters long"
            ),
            Self::TooLong => write!(f, "Task cannot exceed {MAX_TASK_TEXT_CHARS} characters"),
            Self::DuplicateText => write!(f, "This task already exists"),
        }
    }
}

impl Error for ValidationError {}

/// Validates candidate text against every task in `existing`.
///
/// Rules, first failure wins:
/// 1. trimmed text empty -> `EmptyText`
/// 2. fewer than `MIN_TASK_TEXT_CHARS` -> `TooShort`
/// 3. more than `MAX_TASK_TEXT_CHARS` -> `TooLong`
/// 4. case-insensitive match with an existing task -> `DuplicateText`
///
/// Returns the trimmed text on success.
pub fn validate_task_text(
    candidate: &str,
    existing: &[TaskRecord],
) -> Result<String, ValidationError> {
    validate_excluding(candidate, existing, None)
}

/// Same rules as [`validate_task_text`], but the record with `skip` is not
/// considered a duplicate of itself.
pub(crate) fn validate_excluding(
    candidate: &str,
    existing: &[TaskRecord],
    skip: Option<TaskId>,
) -> Result<String, ValidationError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let length = trimmed.chars().count();
    if length < MIN_TASK_TEXT_CHARS {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_TASK_TEXT_CHARS {
        return Err(ValidationError::TooLong);
    }

    let folded = trimmed.to_lowercase();
    let duplicate = existing
        .iter()
        .filter(|task| Some(task.id()) != skip)
        .any(|task| task.text().trim().to_lowercase() == folded);
    if duplicate {
        return Err(ValidationError::DuplicateText);
    }

    Ok(trimmed.to_string())
}
