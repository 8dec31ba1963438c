/// SQLite implementation of the key-value storage interface
///
/// Each key is one row in `kv_store`. Multi-key writes run inside a single
/// transaction so they either all land or none do.

use std::path::Path;
use rusqlite::{Connection, OptionalExtension, params};
use chrono::Utc;

use crate::storage::{StorageError, KeyValueStore, migrations};

/// SQLite-based storage implementation
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file and bring its schema up to date
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        migrations::initialize_database(&conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", db_path);

        Ok(Self { conn })
    }

    /// Create an in-memory database (useful for testing)
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::Connection(format!("Failed to open in-memory database: {}", e)))?;
        migrations::initialize_database(&conn)?;
        Ok(Self { conn })
    }

    /// All keys currently stored, sorted
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key")?;
        let key_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for key in key_iter {
            keys.push(key?);
        }
        Ok(keys)
    }

    fn upsert(conn: &Connection, key: &str, value: &str) -> Result<(), StorageError> {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl KeyValueStore for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::upsert(&self.conn, key, value)?;
        tracing::debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        tracing::debug!("Removed key '{}'", key);
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            Self::upsert(&tx, key, value)?;
        }
        tx.commit()?;
        tracing::debug!("Stored {} keys in one transaction", entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_set_remove() {
        let storage = SqliteStorage::in_memory().unwrap();
        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set("a", "[1,2]").unwrap();
        assert_eq!(storage.get("a").unwrap(), Some("[1,2]".to_string()));

        storage.set("a", "[3]").unwrap();
        assert_eq!(storage.get("a").unwrap(), Some("[3]".to_string()));

        storage.remove("a").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a").unwrap(), None);
    }

    #[test]
    fn test_set_many_writes_all_keys() {
        let storage = SqliteStorage::in_memory().unwrap();
        storage
            .set_many(&[("x", "1".to_string()), ("y", "2".to_string())])
            .unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("wellness.db");

        {
            let storage = SqliteStorage::new(&db_path).unwrap();
            storage.set("wellness_favorites", "[\"ambient-1\"]").unwrap();
        }

        let reopened = SqliteStorage::new(&db_path).unwrap();
        assert_eq!(
            reopened.get("wellness_favorites").unwrap(),
            Some("[\"ambient-1\"]".to_string())
        );
    }
}
