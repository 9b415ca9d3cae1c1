//! # Domain models for users, posts and comments
//!
//! These types are what the rest of the workspace passes around: the
//! credential store persists [`User`]s, the post store holds [`Post`]s with
//! their [`Comment`]s, and the API client maps the remote service's shapes
//! into them. Field names serialize in camelCase (`commentsList`, `postId`),
//! which is also the format written to local storage.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A registered account. Plaintext password; `id` is the string form of its 1-based position at registration time. |
//! | [`Post`] | A blog post. `id` comes from the remote service; everything after `date` is optional because the service does not store it. |
//! | [`Comment`] | A comment on a post, fetched on demand and attached to [`Post::comments_list`]. |
//! | [`PostDraft`] | The client-supplied fields used to create or update a post. |
//! | [`NewComment`] | The client-supplied fields of a new comment. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A registered user, as stored under the `users` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Publication state of a post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Published => "published",
            PostStatus::Draft => "draft",
        }
    }

    /// Parse the form value; anything unrecognised is `None`.
    pub fn from_form(value: &str) -> Option<Self> {
        match value {
            "published" => Some(PostStatus::Published),
            "draft" => Some(PostStatus::Draft),
            _ => None,
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment on a post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub author: String,
    pub content: String,
    /// `YYYY-MM-DD`, empty when the remote service did not provide one.
    #[serde(default)]
    pub date: String,
}

/// A blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// `YYYY-MM-DD`, empty when unknown.
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    /// Comment counter, independent of whether `comments_list` is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_list: Option<Vec<Comment>>,
}

impl Post {
    /// Number of comments to show: the counter, or the loaded list when it is longer.
    pub fn comment_count(&self) -> usize {
        let counter = self.comments.unwrap_or(0) as usize;
        let loaded = self.comments_list.as_ref().map_or(0, Vec::len);
        counter.max(loaded)
    }
}

/// Fields supplied by the client when creating or updating a post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub content: Option<String>,
    pub author: String,
    pub date: String,
    pub category: Option<String>,
    pub status: Option<PostStatus>,
    pub likes: Option<u32>,
    pub comments: Option<u32>,
    pub user_id: Option<u64>,
}

impl PostDraft {
    /// A fresh draft authored today by `author`.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: today(),
            likes: Some(0),
            comments: Some(0),
            ..Self::default()
        }
    }

    /// Pre-fill a draft from an existing post, for editing.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            category: post.category.clone(),
            status: post.status,
            likes: post.likes,
            comments: post.comments,
            user_id: post.user_id,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Client-side check run before any request is made.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Please enter a title");
        }
        Ok(())
    }
}

/// Fields supplied by the client for a new comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

/// Today's date (UTC) as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_camel_case_and_skips_missing() {
        let post = Post {
            id: 7,
            title: "Hello".into(),
            author: "Ada".into(),
            date: "2024-01-02".into(),
            user_id: Some(3),
            ..Post::default()
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 3);
        assert!(json.get("commentsList").is_none());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_post_tolerates_missing_optional_fields() {
        let post: Post = serde_json::from_str(r#"{"id": 1, "title": "t"}"#).unwrap();
        assert_eq!(post.author, "");
        assert!(post.status.is_none());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&PostStatus::Draft).unwrap(), "\"draft\"");
        assert_eq!(PostStatus::from_form("published"), Some(PostStatus::Published));
        assert_eq!(PostStatus::from_form("archived"), None);
    }

    #[test]
    fn test_draft_rejects_blank_title() {
        assert_eq!(PostDraft::new("   ", "Ada").validate(), Err("Please enter a title"));
        assert!(PostDraft::new("Title", "Ada").validate().is_ok());
    }

    #[test]
    fn test_comment_count_covers_loaded_list() {
        let comment = Comment {
            id: 1,
            post_id: 9,
            author: "Ada".into(),
            content: "Nice".into(),
            date: String::new(),
        };
        let mut post = Post {
            id: 9,
            comments_list: Some(vec![comment.clone(), comment]),
            ..Post::default()
        };
        assert_eq!(post.comment_count(), 2);

        post.comments = Some(5);
        assert_eq!(post.comment_count(), 5);

        post.comments_list = None;
        post.comments = None;
        assert_eq!(post.comment_count(), 0);
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
