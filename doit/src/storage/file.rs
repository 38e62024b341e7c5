//! File-backed storage backend
//!
//! All keys live in one JSON object file:
//!
//! ```text
//! {"darkMode":"true","tasks":"[{\"task\":\"Buy milk\",...}]"}
//! ```
//!
//! Opening takes an exclusive lock on `<file>.lock` and holds it until the
//! storage is dropped, so the read at open and every later write form one
//! critical section. A second open of the same path blocks until then. Every
//! write rewrites the whole file through a temp file and rename.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, warn};

use super::{Storage, StorageError};

/// Storage persisted to a single JSON file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
    // exclusive while held; released on drop
    _lock: fs::File,
}

impl FileStorage {
    /// Open storage at the given path, creating the parent directory
    ///
    /// Blocks while another handle on the same path is alive. A missing file
    /// is empty storage. A file that cannot be read or parsed is also treated
    /// as empty; the next write replaces it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let lock = Self::acquire_lock(&path)?;
        let items = Self::read_items(&path);
        debug!(?path, keys = items.len(), "Opened file storage");
        Ok(Self {
            path,
            items,
            _lock: lock,
        })
    }

    fn acquire_lock(path: &Path) -> Result<fs::File, StorageError> {
        let lock_path = path.with_extension("lock");
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StorageError::io(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::io(&lock_path, e))?;
        debug!(?lock_path, "Acquired storage lock");
        Ok(lock_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(path: &Path) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(?path, error = %e, "Failed to read storage file, starting empty");
                return BTreeMap::new();
            }
        };

        if content.trim().is_empty() {
            return BTreeMap::new();
        }

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!(?path, error = %e, "Storage file is not a JSON object of strings, starting empty");
                BTreeMap::new()
            }
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.items)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        debug!(path = ?self.path, keys = self.items.len(), "Flushed file storage");
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
