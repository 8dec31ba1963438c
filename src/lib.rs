/// Public library interface for the Wellness Tracker MCP server
///
/// This module exports the wellness store, its storage backends and the
/// MCP server that exposes them, for use by the binary and by tests.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod store;
mod analytics;
mod mcp;
pub mod tools;

// Re-export public modules and types
pub use domain::*;
pub use storage::{keys, KeyValueStore, MemoryStorage, SqliteStorage, StorageError};
pub use store::{UserDataExport, WellnessStore};
pub use analytics::{AnalyticsEngine, InsightsParams, InsightsResponse};
pub use mcp::McpServer;
pub use mcp::protocol::{JsonRpcResponse, ToolCallResult};

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main wellness tracker server that implements the MCP protocol
///
/// Owns the wellness store, backed by a SQLite database, and the analytics
/// engine used to summarize it.
pub struct WellnessTrackerServer {
    store: WellnessStore<SqliteStorage>,
    analytics: AnalyticsEngine,
}

impl WellnessTrackerServer {
    /// Create a new server with the specified database path
    ///
    /// This will initialize the SQLite database with the required schema
    /// if it doesn't already exist.
    pub async fn new(db_path: PathBuf) -> Result<Self, ServerError> {
        tracing::info!("Initializing Wellness Tracker server with database: {:?}", db_path);

        let storage = SqliteStorage::new(db_path)?;

        Ok(Self {
            store: WellnessStore::new(storage),
            analytics: AnalyticsEngine::new(),
        })
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// This method will block until stdin closes or an error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting MCP server...");

        // Test database connectivity
        let stored_keys = self.store.storage().keys()?;
        tracing::info!(
            "Server started successfully, {} stored collections, {} mood entries",
            stored_keys.len(),
            self.store.list_moods().len()
        );

        let mut mcp_server = McpServer::new(self);
        mcp_server.run().await?;

        Ok(())
    }

    /// Get a reference to the wellness store (useful for testing)
    pub fn store(&self) -> &WellnessStore<SqliteStorage> {
        &self.store
    }

    /// Get a reference to the analytics engine (useful for testing)
    pub fn analytics(&self) -> &AnalyticsEngine {
        &self.analytics
    }
}
