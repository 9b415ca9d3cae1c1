//! Post store context: the shared [`PostsState`] signal and the backend.

use api::Backend;
use dioxus::prelude::*;
use store::{PostsAction, PostsState};

use crate::storage::use_config;

pub fn use_posts() -> Signal<PostsState> {
    use_context::<Signal<PostsState>>()
}

/// The backend selected by `api.mode` in the config.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

/// A dispatch function for the `api::actions` operations that reduces into `posts`.
pub fn post_dispatcher(mut posts: Signal<PostsState>) -> impl FnMut(PostsAction) {
    move |action| posts.write().reduce(action)
}

/// Provides the post store and backend to its children.
/// Expects a [`store::BlogConfig`] in context.
#[component]
pub fn PostsProvider(children: Element) -> Element {
    let config = use_config();
    use_context_provider(|| Backend::from_config(&config.api));
    use_context_provider(|| Signal::new(PostsState::new()));

    rsx! {
        {children}
    }
}
