//! Service configuration — store path and bind address from the environment.
//!
//! The store path is injected into construction rather than fixed
//! process-wide; the environment only provides the values.

use std::path::PathBuf;

/// Runtime configuration for the service binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file holding the collection.
    pub db_path: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Build a config from `FILMSTORE_DB` and `FILMSTORE_ADDR`, falling back
    /// to `db.json` and `0.0.0.0:3000`. Empty variables count as unset.
    pub fn from_env() -> Self {
        Config {
            db_path: PathBuf::from(env_or("FILMSTORE_DB", "db.json")),
            bind_addr: env_or("FILMSTORE_ADDR", "0.0.0.0:3000"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
