//! # Filesystem-backed key/value store
//!
//! [`FileStorage`] is the [`KeyValueStorage`] used by the native (desktop)
//! build, so registered users and the session marker survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── users        # JSON array of users
//! ├── authToken    # encoded session token
//! └── LoggedIn     # "true"
//! ```
//!
//! Use [`dirs::data_dir()`] (in the `ui` crate) to obtain a platform-appropriate
//! base such as `~/.local/share/blog-manager/`.

use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError};

/// One file per key under a base directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.item_path(key)).ok()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.item_path(key), value).map_err(write_err)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
