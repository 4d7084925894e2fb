//! filmstore — movie catalog HTTP service backed by a single JSON file.
//!
//! The core is the persistence-and-consistency layer: a [`FileStore`] that
//! reads and rewrites the whole collection on every mutation, and a
//! [`Catalog`] of lookup/insert/merge-update/delete operations over it.
//! The [`http`] module is thin transport glue mapping routes to catalog
//! outcomes.

mod catalog;
mod config;
mod movie;
mod store;

pub mod http;
pub mod logging;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use movie::Movie;
pub use store::{FileStore, StoreError};
