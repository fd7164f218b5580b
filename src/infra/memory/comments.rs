use async_trait::async_trait;
use time::OffsetDateTime;

use crate::application::repos::{CommentsRepo, CommentsWriteRepo, NewCommentParams, RepoError};
use crate::domain::entities::CommentRecord;
use crate::domain::types::{CommentId, PostId};

use super::MemoryCatalog;

#[async_trait]
impl CommentsRepo for MemoryCatalog {
    async fn list_for_post(&self, post_id: &PostId) -> Result<Vec<CommentRecord>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|comment| comment.post_id == *post_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<CommentRecord>, RepoError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|comment| comment.id == *id).cloned())
    }
}

#[async_trait]
impl CommentsWriteRepo for MemoryCatalog {
    async fn add_comment(&self, params: NewCommentParams) -> Result<CommentRecord, RepoError> {
        if params.body.trim().is_empty() {
            return Err(RepoError::invalid_input("comment body must not be empty"));
        }

        // The post reference is deliberately not checked: dangling
        // references are tolerated catalog-wide and lookups simply skip
        // the orphan.
        let record = CommentRecord {
            id: CommentId::new(self.mint_id("comment")),
            post_id: params.post_id,
            author_id: params.author_id,
            body: params.body,
            posted_on: OffsetDateTime::now_utc().date(),
            likes: 0,
            parent_id: params.parent_id,
        };

        let mut comments = self.comments.write().await;
        comments.push(record.clone());
        Ok(record)
    }

    async fn like_comment(&self, id: &CommentId) -> Result<CommentRecord, RepoError> {
        let mut comments = self.comments.write().await;
        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == *id)
            .ok_or(RepoError::NotFound)?;
        comment.likes += 1;
        Ok(comment.clone())
    }
}
