//! # Application configuration: `blog.toml`
//!
//! Defines the TOML configuration file (filename: [`BlogConfig::filename`] =
//! `"blog.toml"`). On native builds it is read from the platform data
//! directory; the web build runs on the defaults.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://dummyjson.com"
//! mode = "remote"            # "local" keeps posts in memory, no network
//!
//! [session]
//! ttl_secs = 3600            # written into the token, never enforced
//! secret = "blog-manager"    # feeds the placeholder signature
//!
//! [ui]
//! notification_secs = 3
//! default_author = "Mahesh Dubey"
//! ```
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to [`BlogConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reading or writing `blog.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid blog.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not read blog.toml: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level configuration stored in `blog.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which post backend the dashboard talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    #[default]
    Remote,
    Local,
}

/// Remote service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub mode: ApiMode,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mode: ApiMode::default(),
        }
    }
}

/// Session token settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_secret")]
    pub secret: String,
}

fn default_ttl_secs() -> u64 {
    3600
}

fn default_secret() -> String {
    "blog-manager".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            secret: default_secret(),
        }
    }
}

/// Dashboard settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification banner stays up.
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u32,
    /// Author used for new posts when the session carries no name.
    #[serde(default = "default_author")]
    pub default_author: String,
}

fn default_notification_secs() -> u32 {
    3
}

fn default_author() -> String {
    "Mahesh Dubey".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_secs: default_notification_secs(),
            default_author: default_author(),
        }
    }
}

impl BlogConfig {
    /// Builder method to point at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to select the backend.
    pub fn with_mode(mut self, mode: ApiMode) -> Self {
        self.api.mode = mode;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "blog.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read `dir/blog.toml`. A missing file is the default config.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(dir: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = BlogConfig::from_toml("").unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.api.base_url, "https://dummyjson.com");
        assert_eq!(config.api.mode, ApiMode::Remote);
        assert_eq!(config.session.ttl_secs, 3600);
        assert_eq!(config.ui.notification_secs, 3);
    }

    #[test]
    fn test_partial_sections() {
        let config = BlogConfig::from_toml(
            r#"
            [api]
            mode = "local"

            [ui]
            default_author = "Ada"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.mode, ApiMode::Local);
        assert_eq!(config.api.base_url, "https://dummyjson.com");
        assert_eq!(config.ui.default_author, "Ada");
        assert_eq!(config.ui.notification_secs, 3);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = BlogConfig::default()
            .with_base_url("http://localhost:4000")
            .with_mode(ApiMode::Local);
        let text = config.to_toml().unwrap();
        assert_eq!(BlogConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let err = BlogConfig::from_toml("[api]\nmode = \"graphql\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = std::env::temp_dir().join(format!("blog-config-{}", std::process::id()));
        assert_eq!(BlogConfig::load(&dir).unwrap(), BlogConfig::default());

        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(BlogConfig::filename()), "[ui]\nnotification_secs = 5\n").unwrap();
        assert_eq!(BlogConfig::load(&dir).unwrap().ui.notification_secs, 5);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
