//! Task list session service.
//!
//! # Responsibility
//! - Route every UI input event (create, toggle, edit, delete, clear
//!   completed, set filter, set sort) to the owning component.
//! - Produce the current ordered view and stats for rendering.
//!
//! # Invariants
//! - Reads always reflect the latest mutation on the same session.
//! - Filter/sort selection is session state; it never alters stored tasks.

use crate::model::task::{Priority, TaskId, TaskRecord};
use crate::model::validation::{validate_task_text, ValidationError};
use crate::query::stats::{stats, TaskStats};
use crate::query::view::{view, FilterKey, SortKey};
use crate::store::task_store::{Clock, CreateError, SystemClock, TaskStore};
use log::debug;

/// One task list session: a store plus the selected filter and sort.
pub struct TaskListService<C: Clock = SystemClock> {
    store: TaskStore<C>,
    filter: FilterKey,
    sort: SortKey,
}

impl<C: Clock> TaskListService<C> {
    /// Creates a session over `store` with the default `all` / `date` view.
    pub fn new(store: TaskStore<C>) -> Self {
        Self {
            store,
            filter: FilterKey::default(),
            sort: SortKey::default(),
        }
    }

    /// Read access to the owned store.
    pub fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    /// Write access to the owned store, e.g. for `replace_all` on load.
    pub fn store_mut(&mut self) -> &mut TaskStore<C> {
        &mut self.store
    }

    /// Checks candidate text against the current snapshot without storing it.
    ///
    /// Safe to call on every keystroke.
    pub fn validate(&self, text: &str) -> Result<String, ValidationError> {
        validate_task_text(text, self.store.tasks())
    }

    pub fn create(
        &mut self,
        text: &str,
        priority: Priority,
        category: impl Into<String>,
    ) -> Result<TaskRecord, CreateError> {
        self.store.create(text, priority, category)
    }

    pub fn create_with_defaults(&mut self, text: &str) -> Result<TaskRecord, CreateError> {
        self.store.create_with_defaults(text)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        self.store.toggle(id)
    }

    pub fn edit(&mut self, id: TaskId, text: &str) -> Result<bool, ValidationError> {
        self.store.edit(id, text)
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        self.store.remove(id)
    }

    pub fn clear_completed(&mut self) -> usize {
        self.store.clear_completed()
    }

    pub fn filter(&self) -> FilterKey {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FilterKey) {
        debug!("event=view_set_filter module=service filter={filter}");
        self.filter = filter;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        debug!("event=view_set_sort module=service sort={sort}");
        self.sort = sort;
    }

    /// Tasks to render, filtered and ordered by the current selection.
    pub fn visible_tasks(&self) -> Vec<&TaskRecord> {
        view(self.store.tasks(), self.filter, self.sort)
    }

    /// Dashboard counters over the whole store, regardless of the filter.
    pub fn stats(&self) -> TaskStats {
        stats(self.store.tasks())
    }

    /// True when the store has tasks but none pass the current filter.
    ///
    /// Lets the UI tell "no tasks yet" apart from "filter hides everything".
    pub fn is_filtered_empty(&self) -> bool {
        !self.store.is_empty() && self.visible_tasks().is_empty()
    }
}
