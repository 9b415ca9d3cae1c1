//! # API crate: post and comment backends for the blog dashboard
//!
//! Everything the dashboard does that goes beyond the browser lives here: the
//! [`PostsApi`] trait, its two implementations, and the actions that run a
//! backend call and feed the result into a [`store::PostsState`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`PostsApi`], the `reqwest` [`HttpClient`] and the runtime-selected [`Backend`] |
//! | [`local`] | [`LocalApi`], an in-memory backend with no network |
//! | [`remote`] | Wire shapes of the remote demo service and how they merge with client metadata |
//! | [`actions`] | Pending → fulfilled/rejected wrappers around each backend call |
//! | [`error`] | [`ApiError`], whose `Display` is the banner text |

pub mod actions;
pub mod client;
pub mod error;
pub mod local;
pub mod remote;

pub use client::{Backend, HttpClient, PostsApi};
pub use error::ApiError;
pub use local::LocalApi;
