//! Task store: the single mutable owner of task data.
//!
//! # Responsibility
//! - Create, toggle, edit, remove and bulk-clear task records.
//! - Hand out snapshots for the pure query and stats functions.
//! - Accept bulk loads from an external serialization collaborator.
//!
//! # Invariants
//! - The collection is ordered newest-first by insertion.
//! - `next_id` is strictly greater than every id ever stored, so ids are
//!   never reused, even after deletion. Once `u64::MAX` has been handed out
//!   the allocator is exhausted and creation fails instead of wrapping.
//! - A failed operation leaves the collection unchanged.

use crate::config::{TaskListConfig, WELCOME_TASK_TEXT};
use crate::model::task::{Priority, TaskId, TaskRecord};
use crate::model::validation::{validate_excluding, validate_task_text, ValidationError};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time source for `created_at` stamps.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64,
{
    fn now_epoch_ms(&self) -> i64 {
        self()
    }
}

/// Error for [`TaskStore::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateError {
    /// Candidate text was rejected; the store is unchanged.
    Invalid(ValidationError),
    /// Every task id has been handed out already.
    IdSpaceExhausted,
}

impl CreateError {
    /// Stable machine-readable code for FFI envelopes and logs.
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Invalid(err) => err.as_code(),
            Self::IdSpaceExhausted => "id_space_exhausted",
        }
    }
}

impl Display for CreateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted => write!(f, "no task ids left to allocate"),
        }
    }
}

impl Error for CreateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::IdSpaceExhausted => None,
        }
    }
}

impl From<ValidationError> for CreateError {
    fn from(value: ValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Error for bulk loads through [`TaskStore::replace_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two loaded records share one id.
    DuplicateId(TaskId),
    /// A loaded id of `u64::MAX` leaves no room to allocate new ids.
    IdOutOfRange(TaskId),
    /// A loaded record's text violates the validation rules.
    InvalidText {
        id: TaskId,
        source: ValidationError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate task id in loaded records: {id}"),
            Self::IdOutOfRange(id) => {
                write!(f, "loaded task id {id} leaves no room for new ids")
            }
            Self::InvalidText { id, source } => {
                write!(f, "invalid text for loaded task {id}: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) | Self::IdOutOfRange(_) => None,
            Self::InvalidText { source, .. } => Some(source),
        }
    }
}

/// Encapsulated, explicitly owned task collection.
pub struct TaskStore<C: Clock = SystemClock> {
    tasks: Vec<TaskRecord>,
    /// `None` once the id space is used up.
    next_id: Option<u64>,
    clock: C,
    config: TaskListConfig,
}

impl TaskStore<SystemClock> {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, TaskListConfig::default())
    }

    /// Creates a store using the wall clock and the given configuration.
    pub fn with_config(config: TaskListConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates a store with an explicit time source.
    ///
    /// Seeds the welcome task when `config.seed_welcome_task` is set.
    pub fn with_clock(clock: C, config: TaskListConfig) -> Self {
        let mut store = Self {
            tasks: Vec::new(),
            next_id: Some(1),
            clock,
            config,
        };
        if store.config.seed_welcome_task {
            let category = store.config.default_category.clone();
            if store
                .insert(WELCOME_TASK_TEXT.to_string(), Priority::High, category)
                .is_err()
            {
                warn!("event=task_seed module=store status=error error_code=id_space_exhausted");
            }
        }
        store
    }

    /// Active configuration.
    pub fn config(&self) -> &TaskListConfig {
        &self.config
    }

    /// Validates `text` and stores a new pending task as the newest entry.
    ///
    /// # Errors
    /// - `Invalid` with the first failing `ValidationError`.
    /// - `IdSpaceExhausted` when no unused id remains.
    ///
    /// The store is unchanged on any error.
    pub fn create(
        &mut self,
        text: &str,
        priority: Priority,
        category: impl Into<String>,
    ) -> Result<TaskRecord, CreateError> {
        let trimmed = match validate_task_text(text, &self.tasks) {
            Ok(trimmed) => trimmed,
            Err(err) => {
                debug!(
                    "event=task_create module=store status=rejected error_code={}",
                    err.as_code()
                );
                return Err(err.into());
            }
        };

        let record = self.insert(trimmed, priority, category.into())?.clone();
        info!(
            "event=task_create module=store status=ok id={} priority={} total={}",
            record.id(),
            record.priority(),
            self.tasks.len()
        );
        Ok(record)
    }

    /// Creates a task with the configured default priority and category.
    ///
    /// # Errors
    /// - Same as [`TaskStore::create`].
    pub fn create_with_defaults(&mut self, text: &str) -> Result<TaskRecord, CreateError> {
        let priority = self.config.default_priority;
        let category = self.config.default_category.clone();
        self.create(text, priority, category)
    }

    /// Flips `completed` on the matching task.
    ///
    /// Returns `false` when no task has `id`; that is a no-op, not an error.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                let completed = task.toggle();
                debug!("event=task_toggle module=store status=ok id={id} completed={completed}");
                true
            }
            None => {
                debug!("event=task_toggle module=store status=miss id={id}");
                false
            }
        }
    }

    /// Replaces the text of the matching task.
    ///
    /// The new text passes the full validation rules, checked against every
    /// other task; the task's own current text never counts as a duplicate.
    /// Returns `Ok(false)` when no task has `id`.
    ///
    /// # Errors
    /// - Returns the first failing `ValidationError`; the task is unchanged.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, ValidationError> {
        if self.get(id).is_none() {
            debug!("event=task_edit module=store status=miss id={id}");
            return Ok(false);
        }

        let trimmed = validate_excluding(new_text, &self.tasks, Some(id)).map_err(|err| {
            debug!(
                "event=task_edit module=store status=rejected id={id} error_code={}",
                err.as_code()
            );
            err
        })?;

        if let Some(task) = self.find_mut(id) {
            task.set_text(trimmed);
        }
        debug!("event=task_edit module=store status=ok id={id}");
        Ok(true)
    }

    /// Deletes the matching task. Returns `false` when nothing matched.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() != before;
        debug!(
            "event=task_remove module=store status={} id={id}",
            if removed { "ok" } else { "miss" }
        );
        removed
    }

    /// Deletes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        let removed = before - self.tasks.len();
        info!(
            "event=task_clear_completed module=store status=ok removed={removed} remaining={}",
            self.tasks.len()
        );
        removed
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Borrowed view of the stored tasks in storage order (newest first).
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Owned copy of the current collection.
    pub fn snapshot(&self) -> Vec<TaskRecord> {
        self.tasks.clone()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed()).count()
    }

    /// Replaces the whole collection with externally loaded records.
    ///
    /// Records keep the given order and their text is stored trimmed. The id
    /// allocator advances past the largest loaded id so later creations stay
    /// unique.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an id.
    /// - `IdOutOfRange` when a record uses id `u64::MAX`.
    /// - `InvalidText` when a record's text fails validation (including
    ///   duplicate text); the store is unchanged on any error.
    pub fn replace_all(&mut self, mut records: Vec<TaskRecord>) -> Result<(), StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for index in 0..records.len() {
            let id = records[index].id();
            if id.get() == u64::MAX {
                warn!(
                    "event=task_replace_all module=store status=error error_code=id_out_of_range id={id}"
                );
                return Err(StoreError::IdOutOfRange(id));
            }
            if !seen.insert(id) {
                warn!(
                    "event=task_replace_all module=store status=error error_code=duplicate_id id={id}"
                );
                return Err(StoreError::DuplicateId(id));
            }
            let trimmed = validate_task_text(records[index].text(), &records[..index])
                .map_err(|source| {
                    warn!(
                        "event=task_replace_all module=store status=error error_code={} id={id}",
                        source.as_code()
                    );
                    StoreError::InvalidText { id, source }
                })?;
            records[index].set_text(trimmed);
        }

        let max_id = records
            .iter()
            .map(|record| record.id().get())
            .max()
            .unwrap_or(0);
        // max_id < u64::MAX was checked above, so the successor exists.
        self.next_id = self.next_id.map(|next| next.max(max_id + 1));
        self.tasks = records;
        info!(
            "event=task_replace_all module=store status=ok total={}",
            self.tasks.len()
        );
        Ok(())
    }

    fn insert(
        &mut self,
        text: String,
        priority: Priority,
        category: String,
    ) -> Result<&TaskRecord, CreateError> {
        let Some(id) = self.allocate_id() else {
            warn!("event=task_create module=store status=error error_code=id_space_exhausted");
            return Err(CreateError::IdSpaceExhausted);
        };
        let record = TaskRecord::new(id, text, priority, category, self.clock.now_epoch_ms());
        self.tasks.insert(0, record);
        Ok(&self.tasks[0])
    }

    fn allocate_id(&mut self) -> Option<TaskId> {
        let raw = self.next_id?;
        self.next_id = raw.checked_add(1);
        Some(TaskId::new(raw))
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}
