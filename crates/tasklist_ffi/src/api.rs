//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose every task list input event as one sync function.
//! - Return plain envelopes the UI can render without core types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls share one process-wide session; each call holds the session
//!   lock for its whole duration, so a read after a write sees the write.

use log::warn;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tasklist_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner, FilterKey, Priority, SortKey, TaskId, TaskListConfig, TaskListService,
    TaskRecord, TaskStats, TaskStore, ValidationError,
};

const SEED_WELCOME_ENV: &str = "TASKLIST_SEED_WELCOME";

static SESSION: Lazy<Mutex<TaskListService>> = Lazy::new(|| {
    let config = TaskListConfig {
        seed_welcome_task: seed_welcome_from_env(),
        ..TaskListConfig::default()
    };
    Mutex::new(TaskListService::new(TaskStore::with_config(config)))
});

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: `trace|debug|info|warn|error`; blank picks the build default.
/// - `log_dir`: absolute directory for rolling log files.
///
/// # FFI contract
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = if level.trim().is_empty() {
        default_log_level()
    } else {
        level.as_str()
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at_ms: i64,
    /// `low|medium|high`.
    pub priority: String,
    pub category: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatsView {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
    pub high_priority_pending: u32,
    pub completion_percentage: u8,
    pub all_completed: bool,
}

/// Ordered view plus stats, returned after any change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub items: Vec<TaskItem>,
    /// Active filter key.
    pub filter: String,
    /// Active sort key.
    pub sort: String,
    /// Store has tasks but the filter hides all of them.
    pub filtered_empty: bool,
    pub stats: TaskStatsView,
}

/// Result envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected task, when one exists.
    pub task: Option<TaskItem>,
    /// Stable machine code on failure (e.g. `duplicate_text`).
    pub error_code: Option<String>,
    /// Human-readable message for the UI.
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task: Option<TaskItem>) -> Self {
        Self {
            ok: true,
            task,
            error_code: None,
            message: message.into(),
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task: None,
            error_code: Some(code.to_string()),
            message: message.into(),
        }
    }

    fn rejected(err: ValidationError) -> Self {
        Self::failure(err.as_code(), err.to_string())
    }
}

/// Validates input text against the current tasks without storing it.
#[flutter_rust_bridge::frb(sync)]
pub fn task_validate(text: String) -> TaskActionResponse {
    match lock_session().validate(&text) {
        Ok(_) => TaskActionResponse::success("", None),
        Err(err) => TaskActionResponse::rejected(err),
    }
}

/// Creates a task. Missing priority/category fall back to configured
/// defaults.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(
    text: String,
    priority: Option<String>,
    category: Option<String>,
) -> TaskActionResponse {
    create_in(&mut lock_session(), &text, priority, category)
}

/// Flips completion of one task; unknown ids succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: u64) -> TaskActionResponse {
    toggle_in(&mut lock_session(), id)
}

/// Commits an edit; unknown ids succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn task_edit(id: u64, text: String) -> TaskActionResponse {
    edit_in(&mut lock_session(), id, &text)
}

/// Deletes one task; unknown ids succeed as no-ops.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: u64) -> TaskActionResponse {
    delete_in(&mut lock_session(), id)
}

/// Deletes all completed tasks.
#[flutter_rust_bridge::frb(sync)]
pub fn task_clear_completed() -> TaskActionResponse {
    clear_completed_in(&mut lock_session())
}

/// Selects the filter (`all|pending|completed|high|medium|low`).
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_filter(key: String) -> TaskActionResponse {
    set_filter_in(&mut lock_session(), &key)
}

/// Selects the sort (`date|name|status|priority`).
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_sort(key: String) -> TaskActionResponse {
    set_sort_in(&mut lock_session(), &key)
}

/// Current filtered, sorted tasks and stats.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> TaskListResponse {
    list_in(&lock_session())
}

fn lock_session() -> MutexGuard<'static, TaskListService> {
    // A panic while holding the lock cannot leave a half-applied mutation:
    // every store operation validates before it writes.
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn create_in(
    session: &mut TaskListService,
    text: &str,
    priority: Option<String>,
    category: Option<String>,
) -> TaskActionResponse {
    let priority = match priority.as_deref().map(Priority::parse) {
        Some(Ok(priority)) => priority,
        Some(Err(err)) => return TaskActionResponse::failure("invalid_priority", err.to_string()),
        None => session.store().config().default_priority,
    };
    let category = category
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| session.store().config().default_category.clone());

    match session.create(text, priority, category) {
        Ok(task) => TaskActionResponse::success("Task created.", Some(to_task_item(&task))),
        Err(err) => TaskActionResponse::failure(err.as_code(), err.to_string()),
    }
}

fn toggle_in(session: &mut TaskListService, id: u64) -> TaskActionResponse {
    let id = TaskId::new(id);
    if session.toggle(id) {
        TaskActionResponse::success("Task updated.", current_item(session, id))
    } else {
        TaskActionResponse::success("Task not found; nothing changed.", None)
    }
}

fn edit_in(session: &mut TaskListService, id: u64, text: &str) -> TaskActionResponse {
    let id = TaskId::new(id);
    match session.edit(id, text) {
        Ok(true) => TaskActionResponse::success("Task updated.", current_item(session, id)),
        Ok(false) => TaskActionResponse::success("Task not found; nothing changed.", None),
        Err(err) => TaskActionResponse::rejected(err),
    }
}

fn delete_in(session: &mut TaskListService, id: u64) -> TaskActionResponse {
    if session.remove(TaskId::new(id)) {
        TaskActionResponse::success("Task deleted.", None)
    } else {
        TaskActionResponse::success("Task not found; nothing changed.", None)
    }
}

fn clear_completed_in(session: &mut TaskListService) -> TaskActionResponse {
    let removed = session.clear_completed();
    TaskActionResponse::success(format!("Cleared {removed} completed task(s)."), None)
}

fn set_filter_in(session: &mut TaskListService, key: &str) -> TaskActionResponse {
    match FilterKey::parse(key) {
        Ok(filter) => {
            session.set_filter(filter);
            TaskActionResponse::success(format!("Filter set to {filter}."), None)
        }
        Err(err) => {
            warn!("event=ffi_set_filter module=ffi status=rejected error={err}");
            TaskActionResponse::failure("invalid_filter", err.to_string())
        }
    }
}

fn set_sort_in(session: &mut TaskListService, key: &str) -> TaskActionResponse {
    match SortKey::parse(key) {
        Ok(sort) => {
            session.set_sort(sort);
            TaskActionResponse::success(format!("Sort set to {sort}."), None)
        }
        Err(err) => {
            warn!("event=ffi_set_sort module=ffi status=rejected error={err}");
            TaskActionResponse::failure("invalid_sort", err.to_string())
        }
    }
}

fn list_in(session: &TaskListService) -> TaskListResponse {
    TaskListResponse {
        items: session
            .visible_tasks()
            .into_iter()
            .map(to_task_item)
            .collect(),
        filter: session.filter().as_str().to_string(),
        sort: session.sort().as_str().to_string(),
        filtered_empty: session.is_filtered_empty(),
        stats: to_stats_view(session.stats()),
    }
}

fn current_item(session: &TaskListService, id: TaskId) -> Option<TaskItem> {
    session.store().get(id).map(to_task_item)
}

fn to_task_item(task: &TaskRecord) -> TaskItem {
    TaskItem {
        id: task.id().get(),
        text: task.text().to_string(),
        completed: task.is_completed(),
        created_at_ms: task.created_at(),
        priority: task.priority().as_str().to_string(),
        category: task.category().to_string(),
    }
}

fn to_stats_view(stats: TaskStats) -> TaskStatsView {
    let count = |value: usize| u32::try_from(value).unwrap_or(u32::MAX);
    TaskStatsView {
        total: count(stats.total),
        completed: count(stats.completed),
        pending: count(stats.pending),
        high_priority_pending: count(stats.high_priority_pending),
        completion_percentage: stats.completion_percentage,
        all_completed: stats.all_completed(),
    }
}

fn seed_welcome_from_env() -> bool {
    std::env::var(SEED_WELCOME_ENV)
        .map(|raw| matches!(raw.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
