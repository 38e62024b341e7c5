//! Add-task form state

use chrono::NaiveDate;

use super::{Priority, TaskId};
use crate::storage::{Storage, StorageError};
use crate::store::TaskStore;

/// The fields of a task that has not been added yet
///
/// A successful submit clears the draft back to its defaults; a rejected one
/// leaves it untouched so the missing field can be filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether submitting would add a task
    pub fn is_ready(&self) -> bool {
        !self.description.trim().is_empty() && self.due_date.is_some()
    }

    /// Add the draft to the store, resetting it if the task was accepted
    pub fn submit_to<S: Storage>(&mut self, store: &mut TaskStore<S>) -> Result<Option<TaskId>, StorageError> {
        let added = store.add_task(&self.description, self.due_date, self.priority)?;
        if added.is_some() {
            *self = Self::default();
        }
        Ok(added)
    }
}
