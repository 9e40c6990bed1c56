//! Owning task collection, kept in ascending due-time order
//!
//! The store is the single owner of all task records. Every mutation goes
//! through it; nothing outside holds a task reference across operations.

use uuid::Uuid;

use crate::filter::{self, FilterMode};
use crate::task::{Task, TaskStatus};

/// Result of an edit-description attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Description replaced with the trimmed new text
    Applied,
    /// New text was empty after trimming; prior description kept
    RejectedEmpty,
    /// No task with that id
    NotFound,
}

/// Ordered collection of tasks, earliest due first
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task, then restore due-time order
    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
        self.sort_by_due_at();
    }

    /// Stable ascending sort by due timestamp; ties keep prior relative order
    pub fn sort_by_due_at(&mut self) {
        self.tasks.sort_by_key(|task| task.due_at);
    }

    /// Remove a task unconditionally, regardless of status
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip pending <-> completed, returning the new status.
    /// Ordering is untouched; status does not participate in the sort key.
    pub fn toggle_status(&mut self, id: Uuid) -> Option<TaskStatus> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.status = task.status.toggled();
        Some(task.status)
    }

    /// Replace a task's description with the trimmed new text.
    ///
    /// An empty-after-trim result is rejected and the prior description is
    /// kept. Cancellation never reaches this method; the caller simply does
    /// not invoke it.
    pub fn edit_description(&mut self, id: Uuid, new_text: &str) -> EditOutcome {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return EditOutcome::NotFound;
        };

        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return EditOutcome::RejectedEmpty;
        }

        task.description = trimmed.to_string();
        EditOutcome::Applied
    }

    /// Remove every completed task in one sweep; returns how many were removed.
    /// A sweep with nothing completed is a no-op, not an error.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_completed());
        before - self.tasks.len()
    }

    /// Recompute every task's visibility from the current filter mode and
    /// search query. Pure per task; never reorders.
    pub fn apply_filters(&mut self, mode: FilterMode, query: &str) {
        for task in &mut self.tasks {
            task.visible = filter::compute_visibility(task, mode, query);
        }
    }

    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.visible)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_tasks().count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
