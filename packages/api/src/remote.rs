//! # Wire shapes of the remote demo service
//!
//! The remote service stores `{title, body, userId}` for a post and
//! `{body, postId, user}` for a comment. Everything else the dashboard shows
//! (author, date, category, status, counters) is client-side metadata that
//! gets merged into the response here and is *not* persisted remotely: after
//! a reload, posts re-fetched from the service come back without it.
//!
//! | Local | Remote |
//! |-------|--------|
//! | `Post.content` | `body` |
//! | `Post.user_id` | `userId` |
//! | `Post.category` | first of `tags` (listing only) |
//! | `Post.likes` | `reactions.likes` (listing only) |
//! | `Comment.content` | `body` |
//! | `Comment.author` | `user.fullName` or `user.username` |

use serde::{Deserialize, Serialize};
use store::models::{today, Comment, NewComment, Post, PostDraft, PostStatus};

/// Default `userId` sent when the draft carries none.
pub const DEFAULT_USER_ID: u64 = 1;

#[derive(Debug, Default, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub likes: u32,
}

/// A post as returned by `GET /posts`, `GET /posts/:id`, `POST /posts/add`
/// and `PUT /posts/:id`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Option<Reactions>,
}

/// `GET /posts` envelope.
#[derive(Debug, Deserialize)]
pub struct PostList {
    pub posts: Vec<RemotePost>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A comment as returned by `GET /posts/:id/comments` and the add endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteComment {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub post_id: Option<u64>,
    #[serde(default)]
    pub user: Option<RemoteUser>,
}

/// `GET /posts/:id/comments` envelope.
#[derive(Debug, Deserialize)]
pub struct CommentList {
    pub comments: Vec<RemoteComment>,
}

/// Error body, e.g. `{"message": "Post with id '999' not found"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostBody<'a> {
    pub title: &'a str,
    pub body: Option<&'a str>,
    pub user_id: u64,
}

impl<'a> CreatePostBody<'a> {
    pub fn from_draft(draft: &'a PostDraft) -> Self {
        Self {
            title: &draft.title,
            body: draft.content.as_deref(),
            user_id: draft.user_id.unwrap_or(DEFAULT_USER_ID),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatePostBody<'a> {
    pub title: &'a str,
    pub body: Option<&'a str>,
}

impl<'a> UpdatePostBody<'a> {
    pub fn from_draft(draft: &'a PostDraft) -> Self {
        Self {
            title: &draft.title,
            body: draft.content.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentBody<'a> {
    pub body: &'a str,
    pub user_id: u64,
    pub post_id: u64,
}

impl RemotePost {
    /// A post as listed by the service, without any client metadata.
    pub fn into_post(self) -> Post {
        let author = self
            .user_id
            .map(|id| format!("User {id}"))
            .unwrap_or_default();
        Post {
            id: self.id,
            title: self.title,
            author,
            date: String::new(),
            category: self.tags.into_iter().next(),
            content: self.body,
            likes: self.reactions.map(|r| r.likes),
            comments: None,
            status: None,
            user_id: self.user_id,
            comments_list: None,
        }
    }

    /// The server's `id`/`title`/`userId` merged with the draft that created it.
    pub fn merge_created(self, draft: &PostDraft) -> Post {
        Post {
            id: self.id,
            title: self.title,
            author: draft.author.clone(),
            date: draft.date.clone(),
            category: draft.category.clone(),
            content: draft.content.clone(),
            likes: Some(draft.likes.unwrap_or(0)),
            comments: Some(draft.comments.unwrap_or(0)),
            status: Some(draft.status.unwrap_or(PostStatus::Published)),
            user_id: self.user_id.or(draft.user_id),
            comments_list: None,
        }
    }

    /// The server's answer to an update merged with the client's fields.
    pub fn merge_updated(self, draft: &PostDraft) -> Post {
        Post {
            id: self.id,
            title: self.title,
            author: draft.author.clone(),
            date: draft.date.clone(),
            category: draft.category.clone(),
            content: draft.content.clone(),
            likes: draft.likes,
            comments: draft.comments,
            status: draft.status,
            user_id: self.user_id.or(draft.user_id),
            comments_list: None,
        }
    }
}

impl RemoteComment {
    pub fn into_comment(self, post_id: u64) -> Comment {
        let author = self
            .user
            .and_then(|u| u.full_name.or(u.username))
            .unwrap_or_default();
        Comment {
            id: self.id,
            post_id: self.post_id.unwrap_or(post_id),
            author,
            content: self.body,
            date: String::new(),
        }
    }

    /// The server's `id` merged with the client's author, content and today's date.
    pub fn merge_added(self, post_id: u64, comment: &NewComment) -> Comment {
        Comment {
            id: self.id,
            post_id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            date: today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "posts": [
            {
                "id": 1,
                "title": "His mother had always taught him",
                "body": "His mother had always taught him not to ever think of himself as better than others.",
                "tags": ["history", "american", "crime"],
                "reactions": { "likes": 192, "dislikes": 25 },
                "views": 305,
                "userId": 121
            },
            { "id": 2, "title": "Bare", "userId": 7 }
        ],
        "total": 251,
        "skip": 0,
        "limit": 30
    }"#;

    #[test]
    fn test_listing_maps_to_posts() {
        let list: PostList = serde_json::from_str(LISTING).unwrap();
        let posts: Vec<Post> = list.posts.into_iter().map(RemotePost::into_post).collect();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].author, "User 121");
        assert_eq!(posts[0].category.as_deref(), Some("history"));
        assert_eq!(posts[0].likes, Some(192));
        assert!(posts[0].content.as_deref().unwrap().starts_with("His mother"));
        assert_eq!(posts[0].date, "");

        assert!(posts[1].content.is_none());
        assert!(posts[1].category.is_none());
        assert!(posts[1].likes.is_none());
    }

    #[test]
    fn test_create_merges_client_metadata_with_defaults() {
        let remote: RemotePost =
            serde_json::from_str(r#"{"id": 252, "title": "Hello", "userId": 1}"#).unwrap();
        let draft = PostDraft {
            likes: None,
            comments: None,
            ..PostDraft::new("Hello", "Ada").with_category("tech").with_content("Body")
        };

        let post = remote.merge_created(&draft);
        assert_eq!(post.id, 252);
        assert_eq!(post.author, "Ada");
        assert_eq!(post.category.as_deref(), Some("tech"));
        assert_eq!(post.content.as_deref(), Some("Body"));
        assert_eq!(post.likes, Some(0));
        assert_eq!(post.comments, Some(0));
        assert_eq!(post.status, Some(PostStatus::Published));
    }

    #[test]
    fn test_create_body_defaults_user_id() {
        let draft = PostDraft::new("Hello", "Ada").with_content("Body");
        let json = serde_json::to_value(CreatePostBody::from_draft(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Hello", "body": "Body", "userId": 1}));
    }

    #[test]
    fn test_update_keeps_client_fields_as_given() {
        let remote: RemotePost =
            serde_json::from_str(r#"{"id": 3, "title": "Renamed", "body": "server", "userId": 5}"#)
                .unwrap();
        let draft = PostDraft::new("Renamed", "Grace").with_status(PostStatus::Draft);

        let post = remote.merge_updated(&draft);
        assert_eq!(post.id, 3);
        assert_eq!(post.author, "Grace");
        assert_eq!(post.status, Some(PostStatus::Draft));
        assert!(post.content.is_none());
        assert_eq!(post.user_id, Some(5));
    }

    #[test]
    fn test_comments_map_author() {
        let list: CommentList = serde_json::from_str(
            r#"{"comments": [
                {"id": 1, "body": "Nice", "postId": 6, "likes": 3, "user": {"id": 2, "username": "emilys", "fullName": "Emily Johnson"}},
                {"id": 2, "body": "Meh", "postId": 6, "user": {"id": 3, "username": "michaelw"}}
            ]}"#,
        )
        .unwrap();
        let comments: Vec<Comment> = list
            .comments
            .into_iter()
            .map(|c| c.into_comment(6))
            .collect();
        assert_eq!(comments[0].author, "Emily Johnson");
        assert_eq!(comments[1].author, "michaelw");
        assert_eq!(comments[1].post_id, 6);
    }
}
