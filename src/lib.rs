//! Test Results Receiver Library
//!
//! Receives testing-form submissions over HTTP and appends them to
//! per-category tables, growing each table's columns as new fields appear.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod ingest;
pub mod maintenance;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod store;

pub use config::Config;
pub use db::{open_database, RedbStore};
pub use error::{AppError, Result};
pub use store::{MemoryStore, TabularStore};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TabularStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Arc<dyn TabularStore>, config: Config) -> Self {
        Self { store, config }
    }
}
