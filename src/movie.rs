//! The movie record — the unit the catalog stores and serves.

use serde::{Deserialize, Serialize};

/// One movie entry in the catalog.
///
/// `id` is unique within the stored collection. `launch` and `stream` are
/// optional; unset values round-trip as JSON nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub launch: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
}
