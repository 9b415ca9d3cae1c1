use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::{KeyValueStorage, StorageError};

/// In-memory key/value store for testing and as a fallback when no
/// persistent storage is available. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        items.remove(key);
        Ok(())
    }
}
