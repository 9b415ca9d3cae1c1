//! # Browser local storage
//!
//! [`LocalStorage`] is the [`KeyValueStorage`] used on the **web platform**. It
//! is a zero-size handle that looks up `window.localStorage` on every call, so
//! it can be cloned freely into event handlers.
//!
//! Reads swallow errors (a blocked or missing storage reads as empty); writes
//! report them, since a failed write would otherwise look like a successful
//! login that does not stick.

use web_sys::Storage;

use crate::storage::{KeyValueStorage, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
