//! DoIt - to-do list with persisted state
//!
//! Tasks carry a description, a due date, a priority and two independent
//! flags (completed, important). The [`TaskStore`] owns the task list, derives
//! the completed/important views from it on read, and writes every change
//! through to an injected [`Storage`].
//!
//! # Persistence
//!
//! ```text
//! tasks    -> [{"id":"...","task":"Buy milk","date":"2024-01-01","priority":"High","important":false,"completed":false}]
//! darkMode -> true
//! ```
//!
//! # Example
//!
//! ```ignore
//! use doit::{MemoryStorage, Priority, TaskStore};
//!
//! let mut store = TaskStore::load(MemoryStorage::new());
//! store.add_task("Buy milk", Some(date), Priority::High)?;
//! store.toggle_completed(0)?;
//! assert_eq!(store.completion_ratio(), 100.0);
//! ```
//!
//! # Modules
//!
//! - [`domain`] - Task, TaskId, Priority, Theme, TaskDraft
//! - [`storage`] - key-value storage trait and backends
//! - [`store`] - the task store
//! - [`chart`] - completion indicator rendering
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod storage;
pub mod store;

pub use config::Config;
pub use domain::{Priority, Task, TaskDraft, TaskId, Theme};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{DARK_MODE_KEY, TASKS_KEY, TaskStore, TaskView};
