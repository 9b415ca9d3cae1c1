//! # Post backends
//!
//! [`PostsApi`] is the async interface the dashboard's actions are written
//! against. [`HttpClient`] talks to the remote demo service over `reqwest`
//! (which uses `fetch` on wasm); [`crate::LocalApi`] keeps everything in
//! memory. [`Backend`] picks one of the two at runtime from the config.
//!
//! ## Endpoints
//!
//! | Method | Path | Used by |
//! |--------|------|---------|
//! | `GET` | `/posts` | [`get_posts`](PostsApi::get_posts) |
//! | `GET` | `/posts/:id` | [`get_post`](PostsApi::get_post) |
//! | `POST` | `/posts/add` | [`create_post`](PostsApi::create_post) |
//! | `PUT` | `/posts/:id` | [`update_post`](PostsApi::update_post) |
//! | `DELETE` | `/posts/:id` | [`delete_post`](PostsApi::delete_post) |
//! | `GET` | `/posts/:id/comments` | [`get_comments`](PostsApi::get_comments) |
//! | `POST` | `/posts/:id/comments/add` | [`add_comment`](PostsApi::add_comment) |
//!
//! No timeout, retry or cancellation is applied to any request.

use serde::de::DeserializeOwned;
use store::config::{ApiConfig, ApiMode};
use store::models::{Comment, NewComment, Post, PostDraft};

use crate::error::ApiError;
use crate::local::LocalApi;
use crate::remote::{
    AddCommentBody, CommentList, CreatePostBody, ErrorBody, PostList, RemoteComment, RemotePost,
    UpdatePostBody,
};

/// Async interface to wherever posts live.
pub trait PostsApi {
    fn get_posts(&self) -> impl std::future::Future<Output = Result<Vec<Post>, ApiError>>;
    fn get_post(&self, id: u64) -> impl std::future::Future<Output = Result<Post, ApiError>>;
    fn create_post(
        &self,
        draft: &PostDraft,
    ) -> impl std::future::Future<Output = Result<Post, ApiError>>;
    fn update_post(
        &self,
        id: u64,
        draft: &PostDraft,
    ) -> impl std::future::Future<Output = Result<Post, ApiError>>;
    fn delete_post(&self, id: u64) -> impl std::future::Future<Output = Result<(), ApiError>>;
    fn get_comments(
        &self,
        post_id: u64,
    ) -> impl std::future::Future<Output = Result<Vec<Comment>, ApiError>>;
    fn add_comment(
        &self,
        post_id: u64,
        comment: &NewComment,
    ) -> impl std::future::Future<Output = Result<Comment, ApiError>>;
}

/// `reqwest`-backed client for the remote demo service.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request, mapping non-2xx statuses to [`ApiError::Status`] with
    /// the service's `message` when it sent one.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = code, "request failed: {body}");
        Err(match serde_json::from_str::<ErrorBody>(&body) {
            Ok(err) => ApiError::status(code, err.message),
            Err(_) => ApiError::from_status(code),
        })
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let bytes = self.execute(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PostsApi for HttpClient {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        tracing::debug!("GET /posts");
        let list: PostList = self.send(self.http.get(self.url("/posts"))).await?;
        Ok(list.posts.into_iter().map(RemotePost::into_post).collect())
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        tracing::debug!("GET /posts/{id}");
        let post: RemotePost = self
            .send(self.http.get(self.url(&format!("/posts/{id}"))))
            .await?;
        Ok(post.into_post())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!("POST /posts/add");
        let request = self
            .http
            .post(self.url("/posts/add"))
            .json(&CreatePostBody::from_draft(draft));
        let created: RemotePost = self.send(request).await?;
        Ok(created.merge_created(draft))
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, ApiError> {
        tracing::debug!("PUT /posts/{id}");
        let request = self
            .http
            .put(self.url(&format!("/posts/{id}")))
            .json(&UpdatePostBody::from_draft(draft));
        let updated: RemotePost = self.send(request).await?;
        Ok(updated.merge_updated(draft))
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        tracing::debug!("DELETE /posts/{id}");
        self.execute(self.http.delete(self.url(&format!("/posts/{id}"))))
            .await?;
        Ok(())
    }

    async fn get_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        tracing::debug!("GET /posts/{post_id}/comments");
        let list: CommentList = self
            .send(self.http.get(self.url(&format!("/posts/{post_id}/comments"))))
            .await?;
        Ok(list
            .comments
            .into_iter()
            .map(|c| c.into_comment(post_id))
            .collect())
    }

    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
        tracing::debug!("POST /posts/{post_id}/comments/add");
        let request = self
            .http
            .post(self.url(&format!("/posts/{post_id}/comments/add")))
            .json(&AddCommentBody {
                body: &comment.content,
                user_id: crate::remote::DEFAULT_USER_ID,
                post_id,
            });
        let added: RemoteComment = self.send(request).await?;
        Ok(added.merge_added(post_id, comment))
    }
}

/// The backend selected by `api.mode`.
#[derive(Clone, Debug)]
pub enum Backend {
    Remote(HttpClient),
    Local(LocalApi),
}

impl Backend {
    pub fn from_config(config: &ApiConfig) -> Self {
        match config.mode {
            ApiMode::Remote => Backend::Remote(HttpClient::new(config.base_url.clone())),
            ApiMode::Local => Backend::Local(LocalApi::new()),
        }
    }
}

impl PostsApi for Backend {
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        match self {
            Backend::Remote(api) => api.get_posts().await,
            Backend::Local(api) => api.get_posts().await,
        }
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        match self {
            Backend::Remote(api) => api.get_post(id).await,
            Backend::Local(api) => api.get_post(id).await,
        }
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        match self {
            Backend::Remote(api) => api.create_post(draft).await,
            Backend::Local(api) => api.create_post(draft).await,
        }
    }

    async fn update_post(&self, id: u64, draft: &PostDraft) -> Result<Post, ApiError> {
        match self {
            Backend::Remote(api) => api.update_post(id, draft).await,
            Backend::Local(api) => api.update_post(id, draft).await,
        }
    }

    async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        match self {
            Backend::Remote(api) => api.delete_post(id).await,
            Backend::Local(api) => api.delete_post(id).await,
        }
    }

    async fn get_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        match self {
            Backend::Remote(api) => api.get_comments(post_id).await,
            Backend::Local(api) => api.get_comments(post_id).await,
        }
    }

    async fn add_comment(&self, post_id: u64, comment: &NewComment) -> Result<Comment, ApiError> {
        match self {
            Backend::Remote(api) => api.add_comment(post_id, comment).await,
            Backend::Local(api) => api.add_comment(post_id, comment).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpClient::new("https://dummyjson.com/");
        assert_eq!(client.url("/posts"), "https://dummyjson.com/posts");
    }

    #[test]
    fn test_backend_from_config() {
        let remote = Backend::from_config(&ApiConfig::default());
        assert!(matches!(remote, Backend::Remote(ref c) if c.base_url() == "https://dummyjson.com"));

        let local = Backend::from_config(&ApiConfig {
            mode: ApiMode::Local,
            ..ApiConfig::default()
        });
        assert!(matches!(local, Backend::Local(_)));
    }

    #[tokio::test]
    async fn test_local_backend_delegates() {
        let backend = Backend::Local(LocalApi::new());
        let created = backend
            .create_post(&PostDraft::new("Hello", "Ada"))
            .await
            .unwrap();
        assert_eq!(backend.get_post(created.id).await.unwrap().title, "Hello");
    }
}
