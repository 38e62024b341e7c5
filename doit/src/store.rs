//! The task store
//!
//! Owns the task list and the theme flag, and writes both through to storage
//! after every change. Completed and important views are filters over the
//! list computed on read, so they always agree with it: deleting a task
//! removes it from every view at once.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{Priority, Task, TaskId, Theme};
use crate::storage::{Storage, StorageError};

/// Storage key holding the JSON task array
pub const TASKS_KEY: &str = "tasks";

/// Storage key holding the JSON dark-mode boolean
pub const DARK_MODE_KEY: &str = "darkMode";

/// Which subset of the task list to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskView {
    #[default]
    All,
    Completed,
    Important,
}

impl TaskView {
    pub fn contains(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Important => task.important,
        }
    }
}

impl std::fmt::Display for TaskView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All Tasks"),
            Self::Completed => write!(f, "Completed"),
            Self::Important => write!(f, "Important"),
        }
    }
}

/// Task list plus theme, backed by a [`Storage`]
#[derive(Debug)]
pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
    theme: Theme,
}

impl<S: Storage> TaskStore<S> {
    /// Build a store from whatever the storage holds
    ///
    /// Absent or unparseable values fall back to an empty list and the light
    /// theme. Nothing is written until the first change.
    pub fn load(storage: S) -> Self {
        let tasks = read_json::<Vec<Task>>(&storage, TASKS_KEY).unwrap_or_default();
        let theme = read_json::<bool>(&storage, DARK_MODE_KEY)
            .map(Theme::from)
            .unwrap_or_default();

        info!(task_count = tasks.len(), %theme, "Loaded task store");
        Self { storage, tasks, theme }
    }

    /// Write the task list and the theme flag
    pub fn save(&mut self) -> Result<(), StorageError> {
        let tasks = serde_json::to_string(&self.tasks)?;
        let dark_mode = serde_json::to_string(&self.theme.is_dark())?;
        self.storage.set_item(TASKS_KEY, &tasks)?;
        self.storage.set_item(DARK_MODE_KEY, &dark_mode)?;
        debug!(task_count = self.tasks.len(), "Saved task store");
        Ok(())
    }

    /// Append a task
    ///
    /// Declined without error when the description is blank or the date is
    /// missing; returns the new task's id otherwise.
    pub fn add_task(
        &mut self,
        description: &str,
        due_date: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<Option<TaskId>, StorageError> {
        debug!(%description, ?due_date, %priority, "add_task: called");
        let Some(due_date) = due_date else {
            debug!("add_task: no due date, ignoring");
            return Ok(None);
        };
        if description.trim().is_empty() {
            debug!("add_task: blank description, ignoring");
            return Ok(None);
        }

        let task = Task::new(description, due_date, priority);
        let id = task.id.clone();
        self.tasks.push(task);
        self.save()?;

        info!(%id, position = self.tasks.len() - 1, "Added task");
        Ok(Some(id))
    }

    /// Flip `completed` on the task at `position`; returns the new value
    pub fn toggle_completed(&mut self, position: usize) -> Result<Option<bool>, StorageError> {
        debug!(position, "toggle_completed: called");
        let Some(task) = self.tasks.get_mut(position) else {
            debug!(position, "toggle_completed: no task at position");
            return Ok(None);
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.save()?;

        info!(position, completed, ratio = self.completion_ratio(), "Toggled completed");
        Ok(Some(completed))
    }

    /// Flip `important` on the task at `position`; returns the new value
    pub fn toggle_important(&mut self, position: usize) -> Result<Option<bool>, StorageError> {
        debug!(position, "toggle_important: called");
        let Some(task) = self.tasks.get_mut(position) else {
            debug!(position, "toggle_important: no task at position");
            return Ok(None);
        };
        task.important = !task.important;
        let important = task.important;
        self.save()?;

        info!(position, important, "Toggled important");
        Ok(Some(important))
    }

    /// Remove the task at `position`; returns it
    pub fn delete_task(&mut self, position: usize) -> Result<Option<Task>, StorageError> {
        debug!(position, "delete_task: called");
        if position >= self.tasks.len() {
            debug!(position, len = self.tasks.len(), "delete_task: no task at position");
            return Ok(None);
        }
        let removed = self.tasks.remove(position);
        self.save()?;

        info!(id = %removed.id, position, "Deleted task");
        Ok(Some(removed))
    }

    /// Store the dark-mode flag
    pub fn set_theme(&mut self, is_dark: bool) -> Result<(), StorageError> {
        debug!(is_dark, "set_theme: called");
        self.theme = Theme::from(is_dark);
        self.save()?;
        info!(theme = %self.theme, "Set theme");
        Ok(())
    }

    /// Switch between light and dark; returns the new theme
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        self.set_theme(self.theme.toggled().is_dark())?;
        Ok(self.theme)
    }

    /// Percentage of tasks completed, `0.0` for an empty list
    pub fn completion_ratio(&self) -> f64 {
        let completed = self.completed_count();
        let total = self.pending_count() + completed;
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64 * 100.0
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in `view` with their positions, in list order
    pub fn view(&self, view: TaskView) -> impl Iterator<Item = (usize, &Task)> + '_ {
        self.tasks.iter().enumerate().filter(move |(_, t)| view.contains(t))
    }

    /// Tasks with `completed == true`, in list order
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.view(TaskView::Completed).map(|(_, t)| t)
    }

    /// Tasks with `important == true`, in list order
    pub fn important_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.view(TaskView::Important).map(|(_, t)| t)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_tasks().count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    /// Current position of the task with the given id
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage collaborator
    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Read and parse a JSON value, `None` when absent, unreadable or malformed
fn read_json<T: serde::de::DeserializeOwned>(storage: &impl Storage, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read from storage, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is malformed, using default");
            None
        }
    }
}
