//! Catalog — business operations over the file-backed movie collection.
//!
//! Every operation performs a fresh load from the store (read-your-writes
//! within a single process, no in-memory cache), and every mutation holds
//! the store's read-modify-write guard across the load/mutate/save
//! sequence before rewriting the whole collection.
//!
//! ## Quick Start
//!
//! ```ignore
//! use filmstore::{Catalog, FileStore};
//! use serde_json::{json, Map};
//!
//! let catalog = Catalog::new(FileStore::new("db.json"));
//!
//! let payload: Map<_, _> = json!({ "title": "Alpha", "category": "Drama" })
//!     .as_object().cloned().unwrap();
//! let movie = catalog.create("1", payload)?;
//! assert_eq!(catalog.find_by_id("1")?, Some(movie));
//! ```

mod error;

pub use error::CatalogError;

use serde_json::{Map, Value};
use tracing::info;

use crate::movie::Movie;
use crate::store::FileStore;

/// Read an entry's identifier. Non-object entries have none.
fn record_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

/// Reject empty (or whitespace-only) arguments before touching storage.
fn require(value: &str, what: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        Err(CatalogError::InvalidArgument(format!(
            "{} must be a non-empty string",
            what
        )))
    } else {
        Ok(())
    }
}

/// CRUD operations over a [`FileStore`] of movie records.
pub struct Catalog {
    store: FileStore,
}

impl Catalog {
    /// Build a catalog over the given store.
    pub fn new(store: FileStore) -> Self {
        Catalog { store }
    }

    /// The backing store.
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// All syntactically valid records. Empty collection and unreadable
    /// store both come back as an empty list, never an error.
    pub fn list_all(&self) -> Result<Vec<Movie>, CatalogError> {
        let movies = self
            .store
            .load()
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        Ok(movies)
    }

    /// First record whose identifier matches. `Ok(None)` when absent.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Movie>, CatalogError> {
        require(id, "id")?;
        let found = self
            .store
            .load()
            .into_iter()
            .filter(|entry| record_id(entry) == Some(id))
            .find_map(|entry| serde_json::from_value(entry).ok());
        Ok(found)
    }

    /// First record whose title matches exactly. `Ok(None)` when absent.
    pub fn find_by_title(&self, title: &str) -> Result<Option<Movie>, CatalogError> {
        require(title, "title")?;
        let found = self
            .store
            .load()
            .into_iter()
            .filter(|entry| entry.get("title").and_then(Value::as_str) == Some(title))
            .find_map(|entry| serde_json::from_value(entry).ok());
        Ok(found)
    }

    /// All records in the given category. Empty result is not an error.
    pub fn find_by_category(&self, category: &str) -> Result<Vec<Movie>, CatalogError> {
        require(category, "category")?;
        let movies = self
            .store
            .load()
            .into_iter()
            .filter(|entry| entry.get("category").and_then(Value::as_str) == Some(category))
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        Ok(movies)
    }

    /// Insert a new record. The payload is stamped with `id` and must form
    /// a valid movie. A record with the same identifier already present is
    /// a conflict — existing records are never overwritten.
    pub fn create(&self, id: &str, mut payload: Map<String, Value>) -> Result<Movie, CatalogError> {
        require(id, "id")?;
        if payload.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "missing request payload".into(),
            ));
        }

        let _guard = self.store.lock()?;
        let mut collection = self.store.load();

        if collection.iter().any(|entry| record_id(entry) == Some(id)) {
            return Err(CatalogError::Conflict(id.to_string()));
        }

        payload.insert("id".into(), Value::String(id.to_string()));
        let movie: Movie = serde_json::from_value(Value::Object(payload.clone()))
            .map_err(|e| CatalogError::InvalidArgument(e.to_string()))?;

        collection.push(Value::Object(payload));
        self.store.save(&collection)?;

        info!(id, "movie created");
        Ok(movie)
    }

    /// Merge a patch into the record with this identifier.
    ///
    /// Shallow field-level merge: keys present in the patch overwrite, keys
    /// absent are preserved. The `id` field is re-stamped after the merge so
    /// a patch cannot change a record's identifier.
    pub fn update(&self, id: &str, patch: Map<String, Value>) -> Result<Movie, CatalogError> {
        require(id, "id")?;
        if patch.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "missing request payload".into(),
            ));
        }

        let _guard = self.store.lock()?;
        let mut collection = self.store.load();

        let position = collection
            .iter()
            .position(|entry| record_id(entry) == Some(id))
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        // record_id only matches objects, so as_object cannot fail here
        let mut merged = collection[position]
            .as_object()
            .cloned()
            .unwrap_or_default();
        for (key, value) in patch {
            merged.insert(key, value);
        }
        merged.insert("id".into(), Value::String(id.to_string()));

        let movie: Movie = serde_json::from_value(Value::Object(merged.clone()))
            .map_err(|e| CatalogError::InvalidArgument(e.to_string()))?;

        collection[position] = Value::Object(merged);
        self.store.save(&collection)?;

        info!(id, "movie updated");
        Ok(movie)
    }

    /// Remove the first record with this identifier.
    ///
    /// Returns `Ok(true)` after persisting the reduced collection, or
    /// `Ok(false)` — store untouched — when no record matched.
    pub fn delete(&self, id: &str) -> Result<bool, CatalogError> {
        require(id, "id")?;

        let _guard = self.store.lock()?;
        let mut collection = self.store.load();

        let position = collection
            .iter()
            .position(|entry| record_id(entry) == Some(id));
        match position {
            Some(position) => {
                collection.remove(position);
                self.store.save(&collection)?;
                info!(id, "movie deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
