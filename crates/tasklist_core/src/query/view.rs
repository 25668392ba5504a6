//! Filter/sort pipeline for presentation order.
//!
//! # Responsibility
//! - Map UI selector keys to predicates and comparators.
//! - Compose `sort(filter(tasks))` without touching the store.
//!
//! # Invariants
//! - Filtering always runs before sorting.
//! - Sorting is stable: ties keep their relative order from the input.

use crate::model::task::{KeyParseError, Priority, TaskRecord};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Which tasks the presentation layer wants to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    Completed,
    Pending,
    /// Only tasks with exactly this priority.
    Priority(Priority),
}

impl FilterKey {
    /// Every selectable filter, in selector order.
    pub const ALL_KEYS: [FilterKey; 6] = [
        Self::All,
        Self::Pending,
        Self::Completed,
        Self::Priority(Priority::High),
        Self::Priority(Priority::Medium),
        Self::Priority(Priority::Low),
    ];

    /// Stable key string (`all|completed|pending|high|medium|low`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Priority(priority) => priority.as_str(),
        }
    }

    /// Parses a filter key, ignoring surrounding whitespace and ASCII case.
    pub fn parse(value: &str) -> Result<Self, KeyParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(KeyParseError::Empty { kind: "filter" }),
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            other => Priority::parse(other)
                .map(Self::Priority)
                .map_err(|_| KeyParseError::Unsupported {
                    kind: "filter",
                    value: normalized.clone(),
                }),
        }
    }

    /// Returns whether `task` passes this filter.
    pub fn matches(self, task: &TaskRecord) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_completed(),
            Self::Pending => !task.is_completed(),
            Self::Priority(priority) => task.priority() == priority,
        }
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation order selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Newest `created_at` first.
    #[default]
    Date,
    /// Text ascending, collated.
    Name,
    /// Pending before completed.
    Status,
    /// High, then medium, then low.
    Priority,
}

impl SortKey {
    /// Every selectable sort, in selector order.
    pub const ALL_KEYS: [SortKey; 4] = [Self::Date, Self::Name, Self::Status, Self::Priority];

    /// Stable key string (`date|name|status|priority`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Status => "status",
            Self::Priority => "priority",
        }
    }

    /// Parses a sort key, ignoring surrounding whitespace and ASCII case.
    pub fn parse(value: &str) -> Result<Self, KeyParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(KeyParseError::Empty { kind: "sort" }),
            "date" => Ok(Self::Date),
            "name" => Ok(Self::Name),
            "status" => Ok(Self::Status),
            "priority" => Ok(Self::Priority),
            _ => Err(KeyParseError::Unsupported {
                kind: "sort",
                value: normalized,
            }),
        }
    }

    /// Comparator applied by [`view`].
    pub fn compare(self, a: &TaskRecord, b: &TaskRecord) -> Ordering {
        match self {
            Self::Date => b.created_at().cmp(&a.created_at()),
            Self::Name => collate(a.text(), b.text()),
            Self::Status => a.is_completed().cmp(&b.is_completed()),
            Self::Priority => b.priority().cmp(&a.priority()),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters then stably sorts `tasks` for display.
pub fn view(tasks: &[TaskRecord], filter: FilterKey, sort: SortKey) -> Vec<&TaskRecord> {
    let mut visible = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .collect::<Vec<_>>();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

/// Text ordering used by `SortKey::Name`.
///
/// Case-insensitive first; among case-insensitive equals the lowercase form
/// sorts first (`apple < Apple < banana`).
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (left, right) in a.chars().zip(b.chars()) {
        if left == right {
            continue;
        }
        return match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => left.cmp(&right),
        };
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::{collate, FilterKey, SortKey};
    use crate::model::task::{KeyParseError, Priority};
    use std::cmp::Ordering;

    #[test]
    fn collate_is_case_insensitive_with_lowercase_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "apple"), Ordering::Greater);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("abc", "abcd"), Ordering::Less);
    }

    #[test]
    fn keys_round_trip_through_their_strings() {
        for key in FilterKey::ALL_KEYS {
            assert_eq!(FilterKey::parse(key.as_str()).unwrap(), key);
        }
        for key in SortKey::ALL_KEYS {
            assert_eq!(SortKey::parse(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert_eq!(
            FilterKey::parse(" High ").unwrap(),
            FilterKey::Priority(Priority::High)
        );
        assert_eq!(
            FilterKey::parse("done").unwrap_err(),
            KeyParseError::Unsupported {
                kind: "filter",
                value: "done".to_string(),
            }
        );
        assert_eq!(
            SortKey::parse("  ").unwrap_err(),
            KeyParseError::Empty { kind: "sort" }
        );
    }
}
