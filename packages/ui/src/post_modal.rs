//! Create / edit / view dialog for a single post.
//!
//! Exactly one [`ModalMode`] is active at a time. `Edit` and `View` work on
//! the store's `current_post`; closing the dialog clears it.

use api::{actions, ApiError};
use dioxus::prelude::*;
use store::{Comment, NewComment, Post, PostDraft, PostStatus, PostsAction};

use crate::auth::use_auth;
use crate::icons::{FaEye, FaPenToSquare, FaPlus, FaXmark};
use crate::notification::{notify, notify_failure, use_notifications, NotificationLevel};
use crate::posts::{post_dispatcher, use_backend, use_posts};
use crate::storage::use_config;
use crate::views::ModalOverlay;
use crate::Icon;

const MODAL_CSS: Asset = asset!("/assets/styling/post_modal.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit,
    View,
}

impl ModalMode {
    pub fn title(&self) -> &'static str {
        match self {
            ModalMode::Create => "Create New Post",
            ModalMode::Edit => "Edit Post",
            ModalMode::View => "View Post",
        }
    }
}

/// Banner text for a failed save: validation messages as-is, anything else generic.
fn save_failure(err: &ApiError) -> String {
    match err {
        ApiError::Validation(msg) => msg.clone(),
        _ => "Failed to save post. Please try again.".to_string(),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn PostModal(mode: ModalMode, on_close: EventHandler<()>, on_mode_change: EventHandler<ModalMode>) -> Element {
    let mut posts = use_posts();
    // Prefer the live list entry so comments added since opening are kept
    let current = {
        let state = posts.read();
        state
            .current_post
            .as_ref()
            .map(|c| state.find(c.id).cloned().unwrap_or_else(|| c.clone()))
    };

    let close = move |_: ()| {
        posts.write().reduce(PostsAction::SetCurrentPost(None));
        on_close.call(());
    };

    let body = match (mode, current) {
        (ModalMode::Create, _) => rsx! {
            PostForm { post: None, on_done: close }
        },
        (ModalMode::Edit, Some(post)) => rsx! {
            PostForm { post: Some(post), on_done: close }
        },
        (ModalMode::View, Some(post)) => rsx! {
            PostDetails {
                post_id: post.id,
                on_edit: move |_| on_mode_change.call(ModalMode::Edit),
                on_close: close,
            }
        },
        (_, None) => rsx! {
            p { class: "post-modal-empty", "No post selected." }
        },
    };

    rsx! {
        document::Stylesheet { href: MODAL_CSS }

        ModalOverlay {
            on_close: close,
            div {
                class: "post-modal",
                div {
                    class: "post-modal-header",
                    {match mode {
                        ModalMode::Create => rsx! { Icon { icon: FaPlus, width: 16, height: 16 } },
                        ModalMode::Edit => rsx! { Icon { icon: FaPenToSquare, width: 16, height: 16 } },
                        ModalMode::View => rsx! { Icon { icon: FaEye, width: 16, height: 16 } },
                    }}
                    h2 { "{mode.title()}" }
                }
                div { class: "post-modal-body", {body} }
            }
        }
    }
}

/// Title / content / category / status form. `post` is `None` when creating.
#[component]
fn PostForm(#[props(!optional)] post: Option<Post>, on_done: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_config();
    let backend = use_backend();
    let posts = use_posts();
    let mut notes = use_notifications();

    let mut title = use_signal(|| post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let mut content = use_signal(|| post.as_ref().and_then(|p| p.content.clone()).unwrap_or_default());
    let mut category = use_signal(|| post.as_ref().and_then(|p| p.category.clone()).unwrap_or_default());
    let mut status = use_signal(|| post.as_ref().and_then(|p| p.status).unwrap_or_default());
    let mut saving = use_signal(|| false);

    let editing = post.as_ref().map(|p| p.id);
    let author = auth()
        .user_name()
        .map(str::to_string)
        .unwrap_or_else(|| config.ui.default_author.clone());
    let user_id = auth().session.and_then(|s| s.user_id.parse().ok());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = match &post {
            Some(existing) => PostDraft {
                title: title(),
                content: non_empty(content()),
                category: non_empty(category()),
                status: Some(status()),
                ..PostDraft::from_post(existing)
            },
            None => PostDraft {
                content: non_empty(content()),
                category: non_empty(category()),
                status: Some(status()),
                user_id,
                ..PostDraft::new(title(), author.clone())
            },
        };
        let backend = backend.clone();
        spawn(async move {
            saving.set(true);
            let mut dispatch = post_dispatcher(posts);
            let result = match editing {
                Some(id) => actions::update_post(&backend, &mut dispatch, id, draft)
                    .await
                    .map(|_| "Post updated successfully!"),
                None => actions::create_post(&backend, &mut dispatch, draft)
                    .await
                    .map(|_| "Post created successfully!"),
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    notify(&mut notes, NotificationLevel::Success, message);
                    on_done.call(());
                }
                Err(e) => notify(&mut notes, NotificationLevel::Error, save_failure(&e)),
            }
        });
    };

    rsx! {
        form {
            class: "post-form",
            onsubmit: onsubmit,

            label { r#for: "post-title", "Title" }
            input {
                id: "post-title",
                r#type: "text",
                placeholder: "Enter post title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            label { r#for: "post-content", "Content" }
            textarea {
                id: "post-content",
                rows: "8",
                placeholder: "Write your post content here...",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            div {
                class: "post-form-row",
                div {
                    label { r#for: "post-category", "Category" }
                    input {
                        id: "post-category",
                        r#type: "text",
                        placeholder: "e.g. technology",
                        value: category(),
                        oninput: move |evt: FormEvent| category.set(evt.value()),
                    }
                }
                div {
                    label { r#for: "post-status", "Status" }
                    select {
                        id: "post-status",
                        value: status().as_str(),
                        onchange: move |evt: FormEvent| {
                            if let Some(s) = PostStatus::from_form(&evt.value()) {
                                status.set(s);
                            }
                        },
                        option { value: PostStatus::Published.as_str(), "Published" }
                        option { value: PostStatus::Draft.as_str(), "Draft" }
                    }
                }
            }

            div {
                class: "post-modal-actions",
                button {
                    r#type: "button",
                    class: "secondary",
                    onclick: move |_| on_done.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    disabled: saving(),
                    if editing.is_some() { "Update" } else { "Create" }
                }
            }
        }
    }
}

/// Read-only view of a post with its comments and an add-comment form.
/// Comments are fetched once when the view opens.
#[component]
fn PostDetails(post_id: u64, on_edit: EventHandler<()>, on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    let config = use_config();
    let backend = use_backend();
    let posts = use_posts();
    let mut notes = use_notifications();
    let mut draft = use_signal(String::new);

    let load_backend = backend.clone();
    use_hook(move || {
        spawn(async move {
            let mut dispatch = post_dispatcher(posts);
            if let Err(e) = actions::fetch_comments(&load_backend, &mut dispatch, post_id).await {
                tracing::warn!(post_id, "could not load comments: {e}");
                notify_failure(&mut notes, &e);
            }
        })
    });

    let Some(post) = posts.read().find(post_id).cloned() else {
        return rsx! {
            p { class: "post-modal-empty", "This post no longer exists." }
        };
    };

    let author = auth()
        .user_name()
        .map(str::to_string)
        .unwrap_or_else(|| config.ui.default_author.clone());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let comment = NewComment {
            author: author.clone(),
            content: draft().trim().to_string(),
        };
        let backend = backend.clone();
        spawn(async move {
            let mut dispatch = post_dispatcher(posts);
            match actions::add_comment(&backend, &mut dispatch, post_id, comment).await {
                Ok(_) => {
                    draft.set(String::new());
                    notify(&mut notes, NotificationLevel::Success, "Comment added successfully!");
                }
                Err(ApiError::Validation(msg)) => notify(&mut notes, NotificationLevel::Error, msg),
                Err(_) => notify(
                    &mut notes,
                    NotificationLevel::Error,
                    "Failed to add comment. Please try again.",
                ),
            }
        });
    };

    let comments = post.comments_list.clone().unwrap_or_default();
    let count = post.comment_count();

    rsx! {
        article {
            class: "post-details",
            h1 { "{post.title}" }
            p {
                class: "post-meta",
                "{post.author}"
                if !post.date.is_empty() { " · {post.date}" }
                if let Some(category) = &post.category { " · {category}" }
            }
            div {
                class: "post-content",
                {post.content.clone().unwrap_or_else(|| "No content available.".to_string())}
            }
        }

        section {
            class: "post-comments",
            h3 { "Comments ({count})" }
            CommentList { comments }
            form {
                class: "post-comment-form",
                onsubmit: onsubmit,
                textarea {
                    rows: "3",
                    placeholder: "Write a comment...",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button { r#type: "submit", class: "primary", "Add Comment" }
            }
        }

        div {
            class: "post-modal-actions",
            button {
                class: "primary",
                onclick: move |_| on_edit.call(()),
                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                " Edit"
            }
            button {
                class: "secondary",
                onclick: move |_| on_close.call(()),
                Icon { icon: FaXmark, width: 14, height: 14 }
                " Close"
            }
        }
    }
}

/// Comment ids are not unique: the demo service answers every add with the same id.
#[component]
fn CommentList(comments: Vec<Comment>) -> Element {
    if comments.is_empty() {
        return rsx! {
            p { class: "post-comments-empty", "No comments yet." }
        };
    }

    rsx! {
        for (index, comment) in comments.iter().enumerate() {
            div {
                key: "{index}-{comment.id}",
                class: "post-comment",
                div {
                    class: "post-comment-meta",
                    strong { "{comment.author}" }
                    if !comment.date.is_empty() { span { " {comment.date}" } }
                }
                p { "{comment.content}" }
            }
        }
    }
}
