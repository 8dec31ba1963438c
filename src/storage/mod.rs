/// Storage layer for persisting wellness data
///
/// All records live in a key-value medium: each logical collection is one
/// JSON document under one key. This module defines the medium interface and
/// provides a SQLite-backed and an in-memory implementation.

pub mod sqlite;
pub mod memory;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;
pub use memory::*;

use thiserror::Error;
use crate::domain::DomainError;

/// Storage keys owned by the wellness store
///
/// These strings are part of the on-disk format and must not change.
pub mod keys {
    pub const MOODS: &str = "wellness_moods";
    pub const JOURNALS: &str = "wellness_journals";
    pub const SAVED_PROMPTS: &str = "wellness_saved_prompts";
    pub const FAVORITES: &str = "wellness_favorites";
    pub const SETTINGS: &str = "wellness_settings";
    pub const USER_STATS: &str = "wellness_user_stats";

    pub const ALL: [&str; 6] = [MOODS, JOURNALS, SAVED_PROMPTS, FAVORITES, SETTINGS, USER_STATS];
}

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage quota exceeded while writing '{key}'")]
    QuotaExceeded { key: String },

    #[error("Migration error: {0}")]
    Migration(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Trait defining the key-value medium the store persists into
///
/// Reads return `None` for absent keys. Writes replace the whole value.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Write several keys as one unit
    ///
    /// Implementations that can do so should make this all-or-nothing. The
    /// default falls back to sequential writes.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
