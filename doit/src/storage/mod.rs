//! Key-value storage for persisted state
//!
//! String keys map to string values, the same contract as browser local
//! storage. The task store serializes its state to JSON strings before handing
//! them to a backend, so backends never see domain types.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Persistence collaborator injected into the task store
pub trait Storage {
    /// Read a value, `None` if the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; removing an absent key is not an error
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
