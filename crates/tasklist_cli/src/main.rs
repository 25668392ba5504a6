//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tasklist_core` linkage.
//! - Run a short scripted session with deterministic output.

use tasklist_core::{FilterKey, Priority, SortKey, TaskListService, TaskStore};

fn main() {
    println!("tasklist_core ping={}", tasklist_core::ping());
    println!("tasklist_core version={}", tasklist_core::core_version());

    let mut session = TaskListService::new(TaskStore::new());
    let script = [
        ("Plan the week", Priority::High),
        ("Water the plants", Priority::Low),
        ("Reply to emails", Priority::Medium),
        ("plan the week", Priority::Low),
    ];
    for (text, priority) in script {
        match session.create(text, priority, tasklist_core::DEFAULT_CATEGORY) {
            Ok(task) => println!("created id={} priority={}", task.id(), task.priority()),
            Err(err) => println!("rejected text={text:?} reason={err}"),
        }
    }

    let first_low = session
        .visible_tasks()
        .iter()
        .find(|task| task.priority() == Priority::Low)
        .map(|task| task.id());
    if let Some(id) = first_low {
        session.toggle(id);
    }

    session.set_filter(FilterKey::All);
    session.set_sort(SortKey::Priority);
    for task in session.visible_tasks() {
        let mark = if task.is_completed() { "x" } else { " " };
        println!("[{mark}] {:<6} {}", task.priority().as_str(), task.text());
    }

    let stats = session.stats();
    println!(
        "total={} completed={} pending={} high_pending={} progress={}%",
        stats.total,
        stats.completed,
        stats.pending,
        stats.high_priority_pending,
        stats.completion_percentage
    );
}
