//! # In-memory backend
//!
//! [`LocalApi`] is the no-network variant of [`PostsApi`], selected with
//! `api.mode = "local"` and used by the tests. Clones share the same data.
//! Posts and comments are built through the same merge functions as the
//! remote client, so both backends hand the store identical shapes.
//!
//! New post ids are one more than the largest id currently held; a
//! count-based id would hand out an id that is still in use once anything
//! has been deleted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use store::models::{Comment, NewComment, Post, PostDraft};

use crate::client::PostsApi;
use crate::error::ApiError;
use crate::remote::{RemoteComment, RemotePost};

#[derive(Debug, Default)]
struct LocalData {
    posts: Vec<Post>,
    comments: HashMap<u64, Vec<Comment>>,
}

#[derive(Clone, Debug, Default)]
pub struct LocalApi {
    data: Arc<Mutex<LocalData>>,
}

impl LocalApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-loaded with `posts`, newest first.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let api = Self::new();
        if let Ok(mut data) = api.data.lock() {
            data.posts = posts;
        }
        api
    }

    fn data(&self) -> Result<MutexGuard<'_, LocalData>, ApiError> {
        self.data
            .lock()
            .map_err(|_| ApiError::status(500, "Local post store is unavailable"))
    }
}

impl PostsApi for LocalApi {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.data()?.posts.clone())
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.data()?
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Post", id))
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let mut data = self.data()?;
        let id = data.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let stored = RemotePost {
            id,
            title: draft.title.clone(),
            body: draft.content.clone(),
            user_id: Some(draft.user_id.unwrap_or(crate::remote::DEFAULT_USER_ID)),
            tags: Vec::new(),
            reactions: None,
        };
        let post = stored.merge_created(draft);
        data.posts.insert(0, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, ApiError> {
        let mut data = self.data()?;
        let existing = data
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found("Post", id))?;
        let stored = RemotePost {
            id,
            title: draft.title.clone(),
            body: draft.content.clone(),
            user_id: existing.user_id,
            tags: Vec::new(),
            reactions: None,
        };
        let post = stored.merge_updated(draft);
        *existing = post.clone();
        Ok(post)
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        let mut data = self.data()?;
        let before = data.posts.len();
        data.posts.retain(|p| p.id != id);
        if data.posts.len() == before {
            return Err(ApiError::not_found("Post", id));
        }
        data.comments.remove(&id);
        Ok(())
    }

    async fn get_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        let data = self.data()?;
        if !data.posts.iter().any(|p| p.id == post_id) {
            return Err(ApiError::not_found("Post", post_id));
        }
        Ok(data.comments.get(&post_id).cloned().unwrap_or_default())
    }

    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
        let mut data = self.data()?;
        if !data.posts.iter().any(|p| p.id == post_id) {
            return Err(ApiError::not_found("Post", post_id));
        }
        let id = data
            .comments
            .values()
            .flatten()
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
            + 1;
        let stored = RemoteComment {
            id,
            body: comment.content.clone(),
            post_id: Some(post_id),
            user: None,
        };
        let added = stored.merge_added(post_id, comment);
        data.comments.entry(post_id).or_default().push(added.clone());
        Ok(added)
    }
}
