use chrono::{DateTime, Utc};
use tracing::debug;

use crate::filter::{Filter, TaskCounts, visible_tasks};
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task text must not be empty")]
    EmptyText,
}

/// The single owner of application state. Every mutation goes through a
/// named operation; callers persist and re-render after each one.
///
/// Confirmation-gated operations (delete, clear-completed) only carry the
/// apply phase here. The caller asks the host shell for confirmation
/// first and invokes the operation on an explicit confirm, so the logic
/// stays testable without a dialog in the loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    editing: Option<TaskId>,
}

impl TaskStore {
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::default(),
            editing: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn visible(&self) -> Vec<Task> {
        visible_tasks(&self.tasks, self.filter)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.tasks)
    }

    pub fn completed_count(&self) -> usize {
        self.counts().completed
    }

    /// Prepends a fresh task. Rejects text that trims to empty; the
    /// collection is untouched on rejection.
    pub fn add_task(&mut self, text: &str, now: DateTime<Utc>) -> Result<&Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let id = self.allocate_id(now.timestamp_millis());
        let task = Task::new(id, text.to_string(), now);
        debug!(id, "added task");
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    fn allocate_id(&self, now_ms: i64) -> TaskId {
        let last = self.tasks.iter().map(|task| task.id).max().unwrap_or(0);
        if now_ms > last { now_ms } else { last + 1 }
    }

    /// Flips `completed` on the matching task. A missing id is a silent
    /// no-op; stale row references must not crash the app.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "toggled task");
        Some(task.completed)
    }

    /// Apply phase of delete: removes and returns the matching task, or
    /// `None` when the id is already gone.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let task = self.tasks.remove(index);
        debug!(id, "deleted task");
        Some(task)
    }

    /// Opens the edit surface for `id`, returning the task whose text
    /// seeds the dialog. A missing id is a no-op.
    pub fn begin_edit(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.tasks.iter().find(|task| task.id == id)?;
        self.editing = Some(id);
        Some(task)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Commits the edit surface. Empty trimmed text is rejected and the
    /// edit target stays open. A stale target (task deleted while the
    /// dialog was up) commits as `Ok(None)` and closes: the dialog
    /// already captured the text, there is nothing left to update.
    pub fn commit_edit(&mut self, text: &str) -> Result<Option<TaskId>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let Some(id) = self.editing.take() else {
            return Ok(None);
        };

        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.text = text.to_string();
                debug!(id, "edited task");
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Apply phase of clear-completed: removes every completed task and
    /// reports how many went away. Callers check `completed_count`
    /// first and confirm with the user before invoking this.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        debug!(removed, "cleared completed tasks");
        removed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }
}
