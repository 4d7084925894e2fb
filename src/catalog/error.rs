//! Error taxonomy for catalog operations.

use std::fmt;

use crate::store::StoreError;

/// Error type for catalog operations.
///
/// Not-found and conflict are distinct, client-facing outcomes; invalid
/// arguments and store failures are server-side failures. Lookups that find
/// nothing return `Ok(None)` or an empty `Vec`, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required argument was empty, or the request payload was missing.
    InvalidArgument(String),
    /// No record with this identifier exists.
    NotFound(String),
    /// A record with this identifier already exists.
    Conflict(String),
    /// Persisting the collection failed.
    Store(StoreError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidArgument(message) => {
                write!(f, "invalid argument: {}", message)
            }
            CatalogError::NotFound(id) => write!(f, "movie with id '{}' not found", id),
            CatalogError::Conflict(id) => write!(f, "movie with id '{}' already exists", id),
            CatalogError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::Store(err)
    }
}
