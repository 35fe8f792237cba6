//! Storage backends and the fixed-key document store.
//!
//! Persistence is deliberately best-effort: the document is saved on every
//! mutation with no debouncing, a failed save is dropped silently, and a
//! failed load is indistinguishable from an absent document. The stored
//! value is the raw buffer text verbatim, with no envelope around it.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors a storage backend can report.
///
/// These never escape [`DocumentStore`]; the engine maps them to absence
/// (load) or a dropped write (save).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A key-value storage backend.
pub trait Storage {
    /// Read the value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Filesystem-backed storage: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    dir: PathBuf,
}

impl FsStorage {
    /// Create a backend rooted at `dir`; the directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Storage for FsStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.dir.join(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory storage for hosts without a filesystem and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The persistence adapter: a backend bound to the engine's fixed key, with
/// the swallow-errors policy applied.
pub struct DocumentStore {
    storage: Box<dyn Storage>,
    key: String,
}

impl DocumentStore {
    /// Bind a backend to a fixed key.
    pub fn new(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persist the document text, overwriting the previous value.
    ///
    /// Failures are logged at debug and dropped; saving never surfaces an
    /// error to the host.
    pub fn save(&mut self, text: &str) {
        if let Err(err) = self.storage.write(&self.key, text) {
            tracing::debug!(key = %self.key, %err, "dropping failed document save");
        }
    }

    /// Load the persisted document text.
    ///
    /// Returns `None` when nothing is stored or the read fails; the caller
    /// substitutes the built-in default document.
    pub fn load(&self) -> Option<String> {
        match self.storage.read(&self.key) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key = %self.key, %err, "treating failed document load as absent");
                None
            }
        }
    }
}

impl std::fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(io::Error::other("backend down")))
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(io::Error::other("backend down")))
        }
    }

    #[test]
    fn test_fs_storage_round_trips_text_verbatim() {
        let dir = tempdir().unwrap();
        let mut storage = FsStorage::new(dir.path());
        storage.write("doc", "# Title\n\nbody\n").unwrap();
        assert_eq!(
            storage.read("doc").unwrap(),
            Some("# Title\n\nbody\n".to_string())
        );
    }

    #[test]
    fn test_fs_storage_missing_key_reads_as_absent() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path());
        assert_eq!(storage.read("doc").unwrap(), None);
    }

    #[test]
    fn test_fs_storage_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let mut storage = FsStorage::new(dir.path());
        storage.write("doc", "first").unwrap();
        storage.write("doc", "second").unwrap();
        assert_eq!(storage.read("doc").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_memory_storage_round_trips() {
        let mut storage = MemoryStorage::new();
        storage.write("doc", "hello").unwrap();
        assert_eq!(storage.read("doc").unwrap(), Some("hello".to_string()));
        assert_eq!(storage.read("other").unwrap(), None);
    }

    #[test]
    fn test_store_swallows_backend_failures() {
        let mut store = DocumentStore::new(Box::new(FailingStorage), "doc");
        store.save("text");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_store_load_returns_saved_text() {
        let mut store = DocumentStore::new(Box::new(MemoryStorage::new()), "doc");
        store.save("saved text");
        assert_eq!(store.load(), Some("saved text".to_string()));
    }
}
