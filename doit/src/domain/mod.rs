//! Domain types for DoIt
//!
//! Task and its value types, plus the add-task draft.

mod draft;
mod id;
mod priority;
mod task;
mod theme;

pub use draft::TaskDraft;
pub use id::TaskId;
pub use priority::Priority;
pub use task::Task;
pub use theme::Theme;
