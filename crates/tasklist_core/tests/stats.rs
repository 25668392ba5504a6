use tasklist_core::{stats, Priority, TaskStats, TaskStore};

#[test]
fn stats_count_completed_pending_and_high_priority() {
    let mut store = TaskStore::new();
    let done = store.create("Done already", Priority::High, "Work").unwrap();
    store.create("Urgent one", Priority::High, "Work").unwrap();
    store.create("Urgent two", Priority::High, "Home").unwrap();
    store.create("Someday maybe", Priority::Low, "Home").unwrap();
    store.toggle(done.id());

    let result = stats(store.tasks());
    assert_eq!(
        result,
        TaskStats {
            total: 4,
            completed: 1,
            pending: 3,
            high_priority_pending: 2,
            completion_percentage: 25,
        }
    );
    assert!(!result.all_completed());
}

#[test]
fn empty_snapshot_has_zero_percentage() {
    let result = stats(&[]);
    assert_eq!(result, TaskStats::default());
    assert_eq!(result.completion_percentage, 0);
    assert!(!result.all_completed());
}

#[test]
fn all_completed_when_every_task_done() {
    let mut store = TaskStore::new();
    let a = store.create("First chore", Priority::Medium, "Home").unwrap();
    let b = store.create("Second chore", Priority::Medium, "Home").unwrap();
    store.toggle(a.id());
    store.toggle(b.id());

    let result = stats(store.tasks());
    assert_eq!(result.completion_percentage, 100);
    assert!(result.all_completed());
}

#[test]
fn stats_serialize_with_snake_case_fields() {
    let json = serde_json::to_value(TaskStats::default()).unwrap();
    assert_eq!(json["high_priority_pending"], 0);
    assert_eq!(json["completion_percentage"], 0);
}
