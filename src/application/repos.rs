//! Repository traits describing catalog storage adapters.
//!
//! The bundled adapter is in-memory ([`crate::infra::memory`]); a future
//! real datastore substitutes behind these traits without touching callers.

use async_trait::async_trait;
use thiserror::Error;
use time::Date;
use url::Url;

use crate::domain::entities::{AuthorRecord, CommentRecord, PostRecord};
use crate::domain::types::{AuthorId, CommentId, PostFlag, PostId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl RepoError {
    pub fn from_storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Narrowing criteria for post listings. Fields compose with AND; an empty
/// filter lists everything in fixture order.
#[derive(Debug, Clone, Default)]
pub struct PostQueryFilter {
    /// Case-insensitive exact tag match.
    pub tag: Option<String>,
    pub author: Option<AuthorId>,
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub excerpt: String,
    pub body_markdown: String,
    pub cover_image_url: Url,
    pub published_on: Date,
    pub author_id: AuthorId,
    pub tags: Vec<String>,
    pub featured: bool,
    pub trending: bool,
}

/// Partial update: `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub body_markdown: Option<String>,
    pub cover_image_url: Option<Url>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub trending: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewCommentParams {
    /// Not validated against the post set; a dangling reference leaves the
    /// comment orphaned but retrievable.
    pub post_id: PostId,
    pub author_id: AuthorId,
    pub body: String,
    pub parent_id: Option<CommentId>,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    async fn list_posts(&self, filter: &PostQueryFilter) -> Result<Vec<PostRecord>, RepoError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostRecord>, RepoError>;

    /// Free-text search, OR semantics over whitespace-split terms.
    async fn search_posts(&self, query: &str) -> Result<Vec<PostRecord>, RepoError>;

    async fn list_flagged(&self, flag: PostFlag, limit: usize)
    -> Result<Vec<PostRecord>, RepoError>;

    /// Posts sharing at least one tag with `tags`, excluding `exclude`,
    /// fixture order, truncated to `limit`. No relevance ranking.
    async fn list_related(
        &self,
        exclude: &PostId,
        tags: &[String],
        limit: usize,
    ) -> Result<Vec<PostRecord>, RepoError>;

    /// Distinct tags in first-appearance order.
    async fn list_tags(&self) -> Result<Vec<String>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError>;

    async fn update_post(
        &self,
        id: &PostId,
        params: UpdatePostParams,
    ) -> Result<PostRecord, RepoError>;

    /// Removes the post and its comment thread.
    async fn delete_post(&self, id: &PostId) -> Result<(), RepoError>;
}

#[async_trait]
pub trait AuthorsRepo: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>, RepoError>;

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<AuthorRecord>, RepoError>;
}

#[async_trait]
pub trait CommentsRepo: Send + Sync {
    /// Comments on a post in insertion order; `parent_id` nesting is left
    /// for the caller to reconstruct.
    async fn list_for_post(&self, post_id: &PostId) -> Result<Vec<CommentRecord>, RepoError>;

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<CommentRecord>, RepoError>;
}

#[async_trait]
pub trait CommentsWriteRepo: Send + Sync {
    async fn add_comment(&self, params: NewCommentParams) -> Result<CommentRecord, RepoError>;

    async fn like_comment(&self, id: &CommentId) -> Result<CommentRecord, RepoError>;
}
