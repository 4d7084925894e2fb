//! FileStore — the whole record collection persisted as one JSON file.
//!
//! The store is a pure data-access primitive: it loads and rewrites the
//! full collection and knows nothing about movies. Entries are kept as raw
//! `serde_json::Value` mappings; filtering out malformed entries is the
//! catalog's job, not the store's.
//!
//! Read failures (missing file, unparseable content) are normalized to an
//! empty collection and logged — the caller cannot tell absence from
//! corruption. Write failures are always surfaced: swallowing them would
//! desynchronize in-memory and persisted state.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::warn;

/// Error type for store write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Writing the backing file failed.
    Io(String),
    /// Serializing the collection failed.
    Serialize(String),
    /// The read-modify-write lock was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(message) => write!(f, "store i/o error: {}", message),
            StoreError::Serialize(message) => {
                write!(f, "failed to serialize collection: {}", message)
            }
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// JSON-file-backed collection store.
///
/// The path is injected at construction; there is no process-wide default.
/// Each instance carries a `Mutex` that callers hold across a
/// load-modify-save sequence to keep single-process writers from racing.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store over the given file path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from disk.
    ///
    /// An absent file, unreadable file, or content that is not a JSON array
    /// all come back as an empty collection, never as an error.
    pub fn load(&self) -> Vec<Value> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read store file");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(collection) => collection,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store file is not a JSON array");
                Vec::new()
            }
        }
    }

    /// Rewrite the backing file with the full collection.
    pub fn save(&self, collection: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(collection)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("{}: {}", self.path.display(), e)))
    }

    /// Acquire the read-modify-write guard for this store instance.
    ///
    /// Held across a load/mutate/save sequence so mutations within one
    /// process cannot interleave and lose updates.
    pub fn lock(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("read-modify-write"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("db.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_non_array_content_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{\"id\": \"1\"}").unwrap();
        let store = FileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("db.json"));
        let collection = vec![
            json!({ "id": "1", "title": "Alpha", "category": "Drama" }),
            json!({ "id": "2", "title": "Beta", "category": "Comedy" }),
        ];
        store.save(&collection).unwrap();
        assert_eq!(store.load(), collection);
    }

    #[test]
    fn save_load_is_a_no_op_on_content() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("db.json"));
        let collection = vec![json!({ "id": "1", "title": "Alpha", "category": "Drama" })];
        store.save(&collection).unwrap();
        let loaded = store.load();
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), loaded);
    }

    #[test]
    fn save_to_missing_directory_reports_io_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope").join("db.json"));
        let err = store.save(&[]).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
