//! The post dashboard: filter bar, post table, dialogs and banner.

use api::actions;
use dioxus::prelude::*;
use store::filter::categories;
use store::{Post, PostFilter, PostsAction};

use crate::auth::{use_auth, use_session_gate, LogoutButton};
use crate::icons::{FaMagnifyingGlass, FaPlus};
use crate::notification::{
    notify, notify_failure, use_notifications, NotificationBanner, NotificationLevel,
};
use crate::post_modal::{ModalMode, PostModal};
use crate::post_table::PostTable;
use crate::posts::{post_dispatcher, use_backend, use_posts};
use crate::views::ModalOverlay;
use crate::Icon;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// `on_logout` runs once when the session is cleared, and also when the view
/// is opened without a session.
#[component]
pub fn DashboardView(on_logout: EventHandler<()>) -> Element {
    let auth = use_auth();
    let backend = use_backend();
    let mut posts = use_posts();
    let mut notes = use_notifications();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| Option::<String>::None);
    let mut modal = use_signal(|| Option::<ModalMode>::None);
    let mut pending_delete = use_signal(|| Option::<Post>::None);

    let logged_in = use_session_gate(on_logout);

    // Load once per mount, and only with a session
    let load_backend = backend.clone();
    use_hook(move || {
        if logged_in {
            spawn(async move {
                let mut dispatch = post_dispatcher(posts);
                if let Err(e) = actions::fetch_posts(&load_backend, &mut dispatch).await {
                    tracing::error!("could not load posts: {e}");
                    notify_failure(&mut notes, &e);
                }
            });
        }
    });

    if !logged_in {
        return rsx! {};
    }

    let state = posts();
    let filter = PostFilter::new(search(), category());
    let visible: Vec<Post> = filter.apply(&state.posts).into_iter().cloned().collect();
    let all_categories = categories(&state.posts);
    let count = visible.len();
    let greeting = auth().user_name().map(str::to_string);

    let mut open = move |mode: ModalMode, post: Option<Post>| {
        posts.write().reduce(PostsAction::SetCurrentPost(post));
        modal.set(Some(mode));
    };

    let confirm_delete = move |_: MouseEvent| {
        let Some(post) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let backend = backend.clone();
        spawn(async move {
            let mut dispatch = post_dispatcher(posts);
            match actions::delete_post(&backend, &mut dispatch, post.id).await {
                Ok(()) => notify(&mut notes, NotificationLevel::Success, "Post deleted successfully!"),
                Err(_) => notify(
                    &mut notes,
                    NotificationLevel::Error,
                    "Failed to delete post. Please try again.",
                ),
            }
        });
    };

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                h1 { "Blog Management System" }
                div {
                    class: "dashboard-user",
                    if let Some(name) = greeting {
                        span { "Welcome, {name}" }
                    }
                    LogoutButton { class: "secondary" }
                }
            }

            NotificationBanner {}

            main {
                class: "dashboard-main",

                div {
                    class: "dashboard-toolbar",
                    div {
                        h2 { "Blog Posts" }
                        span { class: "dashboard-count", "{count} posts" }
                    }
                    div {
                        class: "dashboard-filters",
                        div {
                            class: "dashboard-search",
                            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                            input {
                                r#type: "text",
                                placeholder: "Search posts...",
                                value: search(),
                                oninput: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                        select {
                            value: category().unwrap_or_default(),
                            onchange: move |evt: FormEvent| {
                                let value = evt.value();
                                category.set((!value.is_empty()).then_some(value));
                            },
                            option { value: "", "All categories" }
                            for name in all_categories {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                        button {
                            class: "primary",
                            onclick: move |_| open(ModalMode::Create, None),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            " New Post"
                        }
                    }
                }

                if let Some(err) = state.error.clone() {
                    div { class: "dashboard-error", role: "alert", "{err}" }
                }

                if state.loading && state.posts.is_empty() {
                    p { class: "dashboard-loading", "Loading posts..." }
                } else {
                    PostTable {
                        posts: visible,
                        on_view: move |post| open(ModalMode::View, Some(post)),
                        on_edit: move |post| open(ModalMode::Edit, Some(post)),
                        on_delete: move |post| pending_delete.set(Some(post)),
                    }
                }
            }

            if let Some(mode) = modal() {
                PostModal {
                    mode,
                    on_close: move |_| modal.set(None),
                    on_mode_change: move |next| modal.set(Some(next)),
                }
            }

            if let Some(post) = pending_delete() {
                ModalOverlay {
                    on_close: move |_| pending_delete.set(None),
                    div {
                        class: "confirm-dialog",
                        p { "Are you sure you want to delete this post?" }
                        p { class: "confirm-title", "{post.title}" }
                        div {
                            class: "post-modal-actions",
                            button {
                                class: "secondary",
                                onclick: move |_| pending_delete.set(None),
                                "Cancel"
                            }
                            button {
                                class: "danger",
                                onclick: confirm_delete,
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
