//! # Store actions: remote calls with pending/fulfilled/rejected phases
//!
//! Each function here is one remote-backed operation of the post store. They
//! all follow the same shape:
//!
//! 1. dispatch [`PostsAction::Pending`] (`loading = true`, error cleared),
//! 2. await the [`PostsApi`] call,
//! 3. dispatch the fulfilled action, or [`PostsAction::Rejected`] with the
//!    error's message,
//! 4. hand the result back so the caller can show a banner.
//!
//! `dispatch` is any `FnMut(PostsAction)`; the UI passes one that writes into
//! its `Signal<PostsState>`, the tests pass one over a plain `PostsState`.
//!
//! Nothing is cancelled, de-duplicated or timed out. A request that never
//! settles leaves `loading` set.

use store::models::{Comment, NewComment, Post, PostDraft};
use store::posts::{Operation, PostsAction};

use crate::client::PostsApi;
use crate::error::ApiError;

fn settle<T>(
    dispatch: &mut impl FnMut(PostsAction),
    op: Operation,
    result: Result<T, ApiError>,
    fulfilled: impl FnOnce(&T) -> PostsAction,
) -> Result<T, ApiError> {
    match result {
        Ok(value) => {
            dispatch(fulfilled(&value));
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(?op, "operation failed: {e}");
            dispatch(PostsAction::Rejected(op, e.to_string()));
            Err(e)
        }
    }
}

/// Load the full post list, replacing what the store holds.
pub async fn fetch_posts<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
) -> Result<Vec<Post>, ApiError> {
    dispatch(PostsAction::Pending(Operation::FetchPosts));
    let result = api.get_posts().await;
    if let Ok(posts) = &result {
        tracing::info!("fetched {} posts", posts.len());
    }
    settle(dispatch, Operation::FetchPosts, result, |posts| {
        PostsAction::PostsLoaded(posts.clone())
    })
}

/// Create a post and prepend it. A blank title is rejected before anything
/// is dispatched or sent.
pub async fn create_post<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
    draft: PostDraft,
) -> Result<Post, ApiError> {
    draft
        .validate()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    dispatch(PostsAction::Pending(Operation::CreatePost));
    let result = api.create_post(&draft).await;
    settle(dispatch, Operation::CreatePost, result, |post| {
        tracing::info!(id = post.id, "created post");
        PostsAction::PostCreated(post.clone())
    })
}

/// Update post `id` and replace it in place.
pub async fn update_post<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
    id: u64,
    draft: PostDraft,
) -> Result<Post, ApiError> {
    draft
        .validate()
        .map_err(|msg| ApiError::Validation(msg.to_string()))?;

    dispatch(PostsAction::Pending(Operation::UpdatePost));
    let result = api.update_post(id, &draft).await;
    settle(dispatch, Operation::UpdatePost, result, |post| {
        tracing::info!(id, "updated post");
        PostsAction::PostUpdated {
            id,
            post: post.clone(),
        }
    })
}

/// Delete post `id` and drop it from the list.
pub async fn delete_post<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
    id: u64,
) -> Result<(), ApiError> {
    dispatch(PostsAction::Pending(Operation::DeletePost));
    let result = api.delete_post(id).await;
    settle(dispatch, Operation::DeletePost, result, |_| {
        tracing::info!(id, "deleted post");
        PostsAction::PostDeleted(id)
    })
}

/// Load the comments of `post_id` into its `commentsList`.
pub async fn fetch_comments<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
    post_id: u64,
) -> Result<Vec<Comment>, ApiError> {
    dispatch(PostsAction::Pending(Operation::FetchComments));
    let result = api.get_comments(post_id).await;
    settle(dispatch, Operation::FetchComments, result, |comments| {
        PostsAction::CommentsLoaded {
            post_id,
            comments: comments.clone(),
        }
    })
}

/// Add a comment to `post_id`, appending it and bumping the counter.
pub async fn add_comment<A: PostsApi>(
    api: &A,
    dispatch: &mut impl FnMut(PostsAction),
    post_id: u64,
    comment: NewComment,
) -> Result<Comment, ApiError> {
    if comment.content.trim().is_empty() {
        return Err(ApiError::Validation("Please enter a comment".to_string()));
    }

    dispatch(PostsAction::Pending(Operation::AddComment));
    let result = api.add_comment(post_id, &comment).await;
    settle(dispatch, Operation::AddComment, result, |added| {
        PostsAction::CommentAdded {
            post_id,
            comment: added.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::posts::PostsState;

    use super::*;
    use crate::local::LocalApi;

    /// Wraps a [`LocalApi`], counting calls and optionally failing all of them.
    #[derive(Default)]
    struct Recording {
        inner: LocalApi,
        calls: Cell<usize>,
        fail: bool,
    }

    impl Recording {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn hit(&self) -> Result<(), ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(ApiError::from_status(500));
            }
            Ok(())
        }
    }

    impl PostsApi for Recording {
        async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
            self.hit()?;
            self.inner.get_posts().await
        }

        async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
            self.hit()?;
            self.inner.get_post(id).await
        }

        async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
            self.hit()?;
            self.inner.create_post(draft).await
        }

        async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, ApiError> {
            self.hit()?;
            self.inner.update_post(id, draft).await
        }

        async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
            self.hit()?;
            self.inner.delete_post(id).await
        }

        async fn get_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
            self.hit()?;
            self.inner.get_comments(post_id).await
        }

        async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
            self.hit()?;
            self.inner.add_comment(post_id, comment).await
        }
    }

    fn seeded(ids: &[u64]) -> LocalApi {
        LocalApi::with_posts(
            ids.iter()
                .map(|&id| Post {
                    id,
                    title: format!("post {id}"),
                    author: "Ada".into(),
                    ..Post::default()
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_fetch_records_phases() {
        let api = seeded(&[1, 2]);
        let mut actions = Vec::new();
        let posts = fetch_posts(&api, &mut |a| actions.push(a)).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(actions[0], PostsAction::Pending(Operation::FetchPosts));
        assert!(matches!(actions[1], PostsAction::PostsLoaded(ref p) if p.len() == 2));
        assert_eq!(actions.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_title_rejected_before_any_call() {
        let api = Recording::default();
        let mut actions = Vec::new();

        let err = create_post(&api, &mut |a| actions.push(a), PostDraft::new("  ", "Ada"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "Please enter a title");
        assert_eq!(api.calls.get(), 0);
        assert!(actions.is_empty());

        let err = update_post(&api, &mut |a| actions.push(a), 1, PostDraft::new("", "Ada"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_create_prepends_into_state() {
        let api = seeded(&[1, 2]);
        let mut state = PostsState::new();
        fetch_posts(&api, &mut |a| state.reduce(a)).await.unwrap();

        let created = create_post(
            &api,
            &mut |a| state.reduce(a),
            PostDraft::new("Fresh", "Ada").with_category("news"),
        )
        .await
        .unwrap();

        assert_eq!(created.id, 3);
        assert!(!state.loading);
        assert_eq!(state.posts[0].title, "Fresh");
        assert_eq!(state.posts[0].category.as_deref(), Some("news"));
        assert_eq!(state.posts.len(), 3);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let api = seeded(&[1, 2, 3]);
        let mut state = PostsState::new();
        fetch_posts(&api, &mut |a| state.reduce(a)).await.unwrap();

        let draft = PostDraft::from_post(&state.posts[1]);
        update_post(
            &api,
            &mut |a| state.reduce(a),
            2,
            PostDraft {
                title: "edited".into(),
                ..draft
            },
        )
        .await
        .unwrap();

        let titles: Vec<&str> = state.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["post 1", "edited", "post 3"]);
    }

    #[tokio::test]
    async fn test_delete_keeps_order_of_the_rest() {
        let api = seeded(&[3, 5, 1, 7]);
        let mut state = PostsState::new();
        fetch_posts(&api, &mut |a| state.reduce(a)).await.unwrap();

        delete_post(&api, &mut |a| state.reduce(a), 5).await.unwrap();
        let ids: Vec<u64> = state.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 7]);
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_clears_loading() {
        let api = Recording::failing();
        let mut state = PostsState::new();

        let err = fetch_posts(&api, &mut |a| state.reduce(a)).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Request failed with status code 500"));
        assert!(state.posts.is_empty());

        // The next attempt clears the previous error while pending
        let mut saw_cleared = false;
        let _ = delete_post(&api, &mut |a| {
            state.reduce(a);
            if state.loading {
                saw_cleared = state.error.is_none();
            }
        }, 1)
        .await;
        assert!(saw_cleared);
    }

    #[tokio::test]
    async fn test_add_comment_increments_counter_once_and_appends() {
        let api = seeded(&[1]);
        let mut state = PostsState::new();
        fetch_posts(&api, &mut |a| state.reduce(a)).await.unwrap();

        let existing = NewComment {
            author: "Bob".into(),
            content: "first".into(),
        };
        api.add_comment(1, &existing).await.unwrap();
        fetch_comments(&api, &mut |a| state.reduce(a), 1).await.unwrap();
        let before = state.find(1).unwrap().comments.unwrap_or(0);

        let added = add_comment(
            &api,
            &mut |a| state.reduce(a),
            1,
            NewComment {
                author: "Carol".into(),
                content: "second".into(),
            },
        )
        .await
        .unwrap();

        let post = state.find(1).unwrap();
        assert_eq!(post.comments.unwrap(), before + 1);
        let list = post.comments_list.as_ref().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.last().unwrap(), &added);
    }

    #[tokio::test]
    async fn test_blank_comment_is_not_sent() {
        let api = Recording::default();
        let mut actions = Vec::new();
        let result = add_comment(
            &api,
            &mut |a| actions.push(a),
            1,
            NewComment {
                author: "Bob".into(),
                content: " ".into(),
            },
        )
        .await;
        assert!(result.is_err());
        assert_eq!(api.calls.get(), 0);
        assert!(actions.is_empty());
    }
}
