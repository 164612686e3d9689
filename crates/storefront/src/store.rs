//! Key-value storage behind the cart.
//!
//! The cart treats storage as an opaque string store: one string value per
//! key, loaded and saved wholesale. [`FileStore`] is the real backend, keeping
//! one JSON document per key under a data directory. [`MemoryStore`] is the
//! in-process double used by tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a stored value failed.
    #[error("failed to read stored value {key}: {source}")]
    Read {
        /// Key being read.
        key: String,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Writing a value failed.
    #[error("failed to write stored value {key}: {source}")]
    Write {
        /// Key being written.
        key: String,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// The opaque string store the cart persists through.
///
/// `load` returns whatever string was last saved under a key, or `None` for a
/// key that has never been written. `save` replaces the value wholesale.
/// There is no locking across processes; the last writer wins.
pub trait CartStore {
    /// Load the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the backend cannot be read. A key
    /// that simply has no value is `Ok(None)`, not an error.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the backend cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: CartStore + ?Sized> CartStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// File-backed store: one `<key>.json` document per key under a directory.
///
/// The directory is created on first save, so a fresh checkout works without
/// any setup step.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl CartStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            key: key.to_owned(),
            source,
        })?;
        fs::write(self.path_for(key), value).map_err(|source| StoreError::Write {
            key: key.to_owned(),
            source,
        })
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
