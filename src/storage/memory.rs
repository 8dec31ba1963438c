/// In-memory key-value storage
///
/// Holds everything in a map. An optional byte quota makes writes fail the
/// way a full browser storage area would, which is how the store's
/// storage-unavailable paths are exercised.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::storage::{StorageError, KeyValueStore};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            quota_bytes: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still structurally valid
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn used_bytes(values: &HashMap<String, String>) -> usize {
        values.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Reject the write if applying `entries` would go over quota
    fn check_quota(
        &self,
        values: &HashMap<String, String>,
        entries: &[(&str, String)],
    ) -> Result<(), StorageError> {
        let Some(quota) = self.quota_bytes else {
            return Ok(());
        };

        let mut projected = values.clone();
        for (key, value) in entries {
            projected.insert(key.to_string(), value.clone());
        }

        if Self::used_bytes(&projected) > quota {
            let key = entries.last().map(|(k, _)| k.to_string()).unwrap_or_default();
            tracing::warn!("Write to '{}' rejected: quota of {} bytes exceeded", key, quota);
            return Err(StorageError::QuotaExceeded { key });
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_many(&[(key, value.to_string())])
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        let mut values = self.lock();
        self.check_quota(&values, entries)?;
        for (key, value) in entries {
            values.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}
