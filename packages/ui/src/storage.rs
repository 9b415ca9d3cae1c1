//! Platform constructors for storage, credentials and configuration.
//!
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): files under `<data_dir>/blog-manager/` via [`store::FileStorage`]
//! - **WASM without `web`**: in-memory only, nothing survives a reload

use store::config::BlogConfig;
use store::CredentialStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStorage = store::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = store::FileStorage;

/// The credential store the auth provider works against.
pub type Credentials = CredentialStore<PlatformStorage>;

/// Directory holding the native store and `blog.toml`.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("blog-manager")
}

/// Create the platform-appropriate key/value store.
pub fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStorage::new(data_dir())
    }
}

pub fn make_credentials(config: &BlogConfig) -> Credentials {
    CredentialStore::new(make_storage(), config.session.clone())
}

/// Load the app config.
///
/// Native builds read `<data_dir>/blog-manager/blog.toml` and then apply
/// `BLOG_API_BASE_URL` from the environment (or a `.env` file). A broken
/// file is logged and replaced by the defaults. The web build always runs
/// on the defaults.
pub fn load_config() -> BlogConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let config = match BlogConfig::load(&data_dir()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}, using defaults");
                BlogConfig::default()
            }
        };
        match std::env::var("BLOG_API_BASE_URL") {
            Ok(url) if !url.is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        BlogConfig::default()
    }
}

/// The config provided at the app root.
pub fn use_config() -> BlogConfig {
    dioxus::prelude::use_context::<BlogConfig>()
}
