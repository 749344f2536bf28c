//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool backing the document store
//! - Process configuration, reported by the config endpoint

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<Config>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the document store.
    ///
    /// Services borrow it per request; there is no other handle to the store.
    pub db: DatabaseConnection,

    /// Configuration read at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Process configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
