//! The content query layer.
//!
//! [`CatalogService`] fronts the repository traits with the operation set a
//! blog front-end calls: listings, lookups, tag and flag filters, related
//! posts, free-text search, and the comment thread, plus the honest write
//! operations. Every call suspends on its latency class before touching the
//! store, emits a query metric, and returns caller-owned copies.

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use thiserror::Error;
use tracing::debug;

use crate::application::repos::{
    AuthorsRepo, CommentsRepo, CommentsWriteRepo, CreatePostParams, NewCommentParams,
    PostQueryFilter, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
};
use crate::domain::entities::{AuthorRecord, CommentRecord, PostRecord};
use crate::domain::types::{AuthorId, CommentId, PostFlag, PostId};

pub(crate) const METRIC_CATALOG_QUERY_TOTAL: &str = "foglio_catalog_query_total";
pub(crate) const METRIC_CATALOG_QUERY_MS: &str = "foglio_catalog_query_ms";

pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const DEFAULT_FEATURED_LIMIT: usize = 3;
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Simulated per-class latency, standing in for network transit.
#[derive(Debug, Clone)]
pub struct LatencyProfile {
    pub list: Duration,
    pub lookup: Duration,
    pub search: Duration,
    pub aggregate: Duration,
    pub write: Duration,
}

impl LatencyProfile {
    /// No artificial delay anywhere. Tests run with this.
    pub fn disabled() -> Self {
        Self {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
            search: Duration::ZERO,
            aggregate: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

/// Default truncation limits for the bounded queries.
#[derive(Debug, Clone)]
pub struct QueryLimits {
    pub related: usize,
    pub featured: usize,
    pub trending: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            related: DEFAULT_RELATED_LIMIT,
            featured: DEFAULT_FEATURED_LIMIT,
            trending: DEFAULT_TRENDING_LIMIT,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown post")]
    UnknownPost,
    #[error("unknown comment")]
    UnknownComment,
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for CatalogError {
    fn from(err: RepoError) -> Self {
        CatalogError::Repo(err)
    }
}

#[derive(Clone)]
pub struct CatalogService {
    posts: Arc<dyn PostsRepo>,
    posts_writer: Arc<dyn PostsWriteRepo>,
    authors: Arc<dyn AuthorsRepo>,
    comments: Arc<dyn CommentsRepo>,
    comments_writer: Arc<dyn CommentsWriteRepo>,
    latency: LatencyProfile,
    limits: QueryLimits,
}

impl CatalogService {
    pub fn new(
        posts: Arc<dyn PostsRepo>,
        posts_writer: Arc<dyn PostsWriteRepo>,
        authors: Arc<dyn AuthorsRepo>,
        comments: Arc<dyn CommentsRepo>,
        comments_writer: Arc<dyn CommentsWriteRepo>,
        latency: LatencyProfile,
        limits: QueryLimits,
    ) -> Self {
        Self {
            posts,
            posts_writer,
            authors,
            comments,
            comments_writer,
            latency,
            limits,
        }
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn record(op: &'static str, started: Instant) {
        counter!(METRIC_CATALOG_QUERY_TOTAL, "op" => op).increment(1);
        histogram!(METRIC_CATALOG_QUERY_MS, "op" => op)
            .record(started.elapsed().as_secs_f64() * 1000.0);
    }

    /// All posts, fixture order.
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.list).await;
        let posts = self.posts.list_posts(&PostQueryFilter::default()).await?;
        Self::record("list_posts", started);
        debug!(count = posts.len(), "listed posts");
        Ok(posts)
    }

    pub async fn post_by_id(&self, id: &PostId) -> Result<Option<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.lookup).await;
        let post = self.posts.find_by_id(id).await?;
        Self::record("post_by_id", started);
        debug!(%id, found = post.is_some(), "post lookup");
        Ok(post)
    }

    /// Posts carrying `tag`, case-insensitively, fixture order. An empty
    /// tag matches nothing.
    pub async fn posts_by_tag(&self, tag: &str) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.list).await;
        let filter = PostQueryFilter {
            tag: Some(tag.to_string()),
            ..Default::default()
        };
        let posts = self.posts.list_posts(&filter).await?;
        Self::record("posts_by_tag", started);
        debug!(tag, count = posts.len(), "listed posts by tag");
        Ok(posts)
    }

    pub async fn posts_by_author(
        &self,
        author_id: &AuthorId,
    ) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.list).await;
        let filter = PostQueryFilter {
            author: Some(author_id.clone()),
            ..Default::default()
        };
        let posts = self.posts.list_posts(&filter).await?;
        Self::record("posts_by_author", started);
        debug!(author = %author_id, count = posts.len(), "listed posts by author");
        Ok(posts)
    }

    /// Up to `limit` (default 3) other posts sharing at least one tag with
    /// `tags`, excluding the source post, fixture order.
    pub async fn related_posts(
        &self,
        id: &PostId,
        tags: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.aggregate).await;
        let limit = limit.unwrap_or(self.limits.related);
        let posts = self.posts.list_related(id, tags, limit).await?;
        Self::record("related_posts", started);
        debug!(source = %id, count = posts.len(), "listed related posts");
        Ok(posts)
    }

    pub async fn featured_posts(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.aggregate).await;
        let limit = limit.unwrap_or(self.limits.featured);
        let posts = self.posts.list_flagged(PostFlag::Featured, limit).await?;
        Self::record("featured_posts", started);
        Ok(posts)
    }

    pub async fn trending_posts(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.aggregate).await;
        let limit = limit.unwrap_or(self.limits.trending);
        let posts = self.posts.list_flagged(PostFlag::Trending, limit).await?;
        Self::record("trending_posts", started);
        Ok(posts)
    }

    /// Free-text search. Terms are OR-ed: one matching word anywhere in
    /// title, body, or tags admits the post. An empty query matches nothing.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<PostRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.search).await;
        let posts = self.posts.search_posts(query).await?;
        Self::record("search_posts", started);
        debug!(query, count = posts.len(), "searched posts");
        Ok(posts)
    }

    /// Distinct tags across the catalog in first-appearance order.
    pub async fn all_tags(&self) -> Result<Vec<String>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.aggregate).await;
        let tags = self.posts.list_tags().await?;
        Self::record("all_tags", started);
        Ok(tags)
    }

    pub async fn list_authors(&self) -> Result<Vec<AuthorRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.lookup).await;
        let authors = self.authors.list_authors().await?;
        Self::record("list_authors", started);
        Ok(authors)
    }

    pub async fn author_by_id(&self, id: &AuthorId) -> Result<Option<AuthorRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.lookup).await;
        let author = self.authors.find_by_id(id).await?;
        Self::record("author_by_id", started);
        debug!(%id, found = author.is_some(), "author lookup");
        Ok(author)
    }

    pub async fn comments_for_post(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<CommentRecord>, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.list).await;
        let comments = self.comments.list_for_post(post_id).await?;
        Self::record("comments_for_post", started);
        debug!(post = %post_id, count = comments.len(), "listed comments");
        Ok(comments)
    }

    /// Mints a time-based id and appends the post to the store. The write
    /// is visible to every subsequent query for the life of the process.
    pub async fn create_post(
        &self,
        params: CreatePostParams,
    ) -> Result<PostRecord, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.write).await;
        let post = self.posts_writer.create_post(params).await?;
        Self::record("create_post", started);
        debug!(id = %post.id, "created post");
        Ok(post)
    }

    pub async fn update_post(
        &self,
        id: &PostId,
        params: UpdatePostParams,
    ) -> Result<PostRecord, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.write).await;
        let post = self
            .posts_writer
            .update_post(id, params)
            .await
            .map_err(|err| match err {
                RepoError::NotFound => CatalogError::UnknownPost,
                other => CatalogError::Repo(other),
            })?;
        Self::record("update_post", started);
        debug!(%id, "updated post");
        Ok(post)
    }

    /// Removes the post and its comment thread. Deleting an absent post is
    /// an error, not a silent success.
    pub async fn delete_post(&self, id: &PostId) -> Result<(), CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.write).await;
        self.posts_writer
            .delete_post(id)
            .await
            .map_err(|err| match err {
                RepoError::NotFound => CatalogError::UnknownPost,
                other => CatalogError::Repo(other),
            })?;
        Self::record("delete_post", started);
        debug!(%id, "deleted post");
        Ok(())
    }

    pub async fn add_comment(
        &self,
        params: NewCommentParams,
    ) -> Result<CommentRecord, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.write).await;
        let comment = self.comments_writer.add_comment(params).await?;
        Self::record("add_comment", started);
        debug!(id = %comment.id, post = %comment.post_id, "added comment");
        Ok(comment)
    }

    pub async fn like_comment(&self, id: &CommentId) -> Result<CommentRecord, CatalogError> {
        let started = Instant::now();
        self.pause(self.latency.write).await;
        let comment = self
            .comments_writer
            .like_comment(id)
            .await
            .map_err(|err| match err {
                RepoError::NotFound => CatalogError::UnknownComment,
                other => CatalogError::Repo(other),
            })?;
        Self::record("like_comment", started);
        debug!(%id, likes = comment.likes, "liked comment");
        Ok(comment)
    }
}
