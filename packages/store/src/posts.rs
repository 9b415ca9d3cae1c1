//! # Post store: state and reducer
//!
//! [`PostsState`] is the single mutable collection of posts the dashboard
//! renders, plus the request-status flags. It is only ever changed through
//! [`PostsState::reduce`]; the async operations in the `api` crate dispatch a
//! [`PostsAction::Pending`], await the backend, then dispatch either the
//! matching fulfilled action or [`PostsAction::Rejected`].
//!
//! Completions apply in whatever order they arrive. Two concurrent creates
//! both prepend, and the one that settles last ends up first.

use crate::models::{Comment, Post};

/// The remote-backed operations, used to tag pending/rejected actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    FetchPosts,
    CreatePost,
    UpdatePost,
    DeletePost,
    FetchComments,
    AddComment,
}

impl Operation {
    /// Banner text used when a failure carries no message of its own.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchPosts => "Failed to fetch posts",
            Operation::CreatePost => "Failed to create post",
            Operation::UpdatePost => "Failed to update post",
            Operation::DeletePost => "Failed to delete post",
            Operation::FetchComments => "Failed to fetch comments",
            Operation::AddComment => "Failed to add comment",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PostsAction {
    Pending(Operation),
    Rejected(Operation, String),
    PostsLoaded(Vec<Post>),
    PostCreated(Post),
    PostUpdated { id: u64, post: Post },
    PostDeleted(u64),
    CommentsLoaded { post_id: u64, comments: Vec<Comment> },
    CommentAdded { post_id: u64, comment: Comment },
    SetCurrentPost(Option<Post>),
    ClearError,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_post: Option<Post>,
}

impl PostsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Apply one action.
    pub fn reduce(&mut self, action: PostsAction) {
        match action {
            PostsAction::Pending(_) => {
                self.loading = true;
                self.error = None;
            }
            PostsAction::Rejected(op, message) => {
                self.loading = false;
                self.error = Some(if message.is_empty() {
                    op.failure_message().to_string()
                } else {
                    message
                });
            }
            PostsAction::PostsLoaded(posts) => {
                self.loading = false;
                self.posts = posts;
            }
            PostsAction::PostCreated(post) => {
                self.loading = false;
                self.posts.insert(0, post);
            }
            PostsAction::PostUpdated { id, post } => {
                self.loading = false;
                if let Some(existing) = self.find_mut(id) {
                    *existing = post;
                }
            }
            PostsAction::PostDeleted(id) => {
                self.loading = false;
                self.posts.retain(|p| p.id != id);
            }
            PostsAction::CommentsLoaded { post_id, comments } => {
                self.loading = false;
                if let Some(post) = self.find_mut(post_id) {
                    post.comments_list = Some(comments);
                }
            }
            PostsAction::CommentAdded { post_id, comment } => {
                self.loading = false;
                if let Some(post) = self.find_mut(post_id) {
                    post.comments_list.get_or_insert_with(Vec::new).push(comment);
                    post.comments = Some(post.comments.unwrap_or(0) + 1);
                }
            }
            PostsAction::SetCurrentPost(post) => {
                self.current_post = post;
            }
            PostsAction::ClearError => {
                self.error = None;
            }
        }
    }
}
