//! Aggregate counters for the dashboard.

use crate::model::task::{Priority, TaskRecord};
use serde::Serialize;

/// Derived counts over one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// High priority tasks that are not completed yet.
    pub high_priority_pending: usize,
    /// `round(100 * completed / total)`, half rounding up; 0 when empty.
    pub completion_percentage: u8,
}

impl TaskStats {
    /// True only for a non-empty list where every task is completed.
    pub fn all_completed(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Derives [`TaskStats`] from a snapshot.
pub fn stats(tasks: &[TaskRecord]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    let high_priority_pending = tasks
        .iter()
        .filter(|task| task.priority() == Priority::High && !task.is_completed())
        .count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        high_priority_pending,
        completion_percentage: completion_percentage(completed, total),
    }
}

fn completion_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer form of round-half-up on 100 * completed / total.
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::completion_percentage;

    #[test]
    fn percentage_guards_empty_and_rounds_half_up() {
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(1, 8), 13);
        assert_eq!(completion_percentage(3, 3), 100);
    }
}
