pub mod config;
pub mod credentials;
pub mod filter;
pub mod models;
pub mod posts;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::{ApiMode, BlogConfig, ConfigError};
pub use credentials::{AuthError, CredentialStore};
pub use filter::PostFilter;
pub use models::{Comment, NewComment, Post, PostDraft, PostStatus, User};
pub use posts::{Operation, PostsAction, PostsState};
pub use session::SessionToken;
pub use storage::{KeyValueStorage, StorageError};
