//! This crate contains all shared UI for the workspace: the context
//! providers, the dashboard components and the two page views that the
//! web and desktop crates route to.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{load_config, make_credentials, make_storage, use_config, Credentials, PlatformStorage};

mod auth;
pub use auth::{use_auth, use_credentials, use_session_gate, AuthProvider, AuthState, LogoutButton};

mod posts;
pub use posts::{post_dispatcher, use_backend, use_posts, PostsProvider};

pub mod notification;
pub use notification::{
    notify, notify_failure, use_notifications, NotificationBanner, NotificationLevel, Notifications,
};

mod post_modal;
pub use post_modal::{ModalMode, PostModal};

mod post_table;
pub use post_table::PostTable;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
