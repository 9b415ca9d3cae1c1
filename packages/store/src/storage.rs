//! # Key/value storage: the local persistence seam
//!
//! Everything the app keeps between visits (the registered users and the
//! session marker) lives in a flat, string-keyed store with the same shape as
//! the browser's `localStorage`. [`KeyValueStorage`] is that shape; the rest of
//! the crate only ever talks to the trait.
//!
//! ## Implementations
//!
//! | Type | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStorage`] | all | shared `HashMap`, used by tests and as a fallback |
//! | [`crate::LocalStorage`] | wasm32 + `web` | `window.localStorage` |
//! | [`crate::FileStorage`] | native | one file per key under a base directory |
//!
//! Access is synchronous and unguarded: two tabs (or two processes sharing a
//! data directory) write over each other, last writer wins.

use thiserror::Error;

/// Failure writing to, or opening, the underlying store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Synchronous string key/value store.
pub trait KeyValueStorage {
    /// Read a key. Missing keys (and unreadable ones) are `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
