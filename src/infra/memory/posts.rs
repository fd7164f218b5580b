use async_trait::async_trait;

use crate::application::repos::{
    CreatePostParams, PostQueryFilter, PostsRepo, PostsWriteRepo, RepoError, UpdatePostParams,
};
use crate::domain::entities::PostRecord;
use crate::domain::search;
use crate::domain::types::{PostFlag, PostId};

use super::MemoryCatalog;

#[async_trait]
impl PostsRepo for MemoryCatalog {
    async fn list_posts(&self, filter: &PostQueryFilter) -> Result<Vec<PostRecord>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| match &filter.tag {
                Some(tag) => search::has_tag(post, tag),
                None => true,
            })
            .filter(|post| match &filter.author {
                Some(author) => post.author_id == *author,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostRecord>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == *id).cloned())
    }

    async fn search_posts(&self, query: &str) -> Result<Vec<PostRecord>, RepoError> {
        let terms = search::split_terms(query);
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| search::matches_terms(post, &terms))
            .cloned()
            .collect())
    }

    async fn list_flagged(
        &self,
        flag: PostFlag,
        limit: usize,
    ) -> Result<Vec<PostRecord>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| post.has_flag(flag))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_related(
        &self,
        exclude: &PostId,
        tags: &[String],
        limit: usize,
    ) -> Result<Vec<PostRecord>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| post.id != *exclude)
            .filter(|post| search::shares_tag(post, tags))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_tags(&self) -> Result<Vec<String>, RepoError> {
        let posts = self.posts.read().await;
        let mut tags: Vec<String> = Vec::new();
        for post in posts.iter() {
            for tag in &post.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        Ok(tags)
    }
}

#[async_trait]
impl PostsWriteRepo for MemoryCatalog {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        if params.title.trim().is_empty() {
            return Err(RepoError::invalid_input("post title must not be empty"));
        }

        let record = PostRecord {
            id: PostId::new(self.mint_id("post")),
            title: params.title,
            excerpt: params.excerpt,
            body_markdown: params.body_markdown,
            cover_image_url: params.cover_image_url,
            published_on: params.published_on,
            author_id: params.author_id,
            tags: params.tags,
            featured: params.featured,
            trending: params.trending,
        };

        let mut posts = self.posts.write().await;
        posts.push(record.clone());
        Ok(record)
    }

    async fn update_post(
        &self,
        id: &PostId,
        params: UpdatePostParams,
    ) -> Result<PostRecord, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == *id)
            .ok_or(RepoError::NotFound)?;

        if let Some(title) = params.title {
            if title.trim().is_empty() {
                return Err(RepoError::invalid_input("post title must not be empty"));
            }
            post.title = title;
        }
        if let Some(excerpt) = params.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(body_markdown) = params.body_markdown {
            post.body_markdown = body_markdown;
        }
        if let Some(cover_image_url) = params.cover_image_url {
            post.cover_image_url = cover_image_url;
        }
        if let Some(tags) = params.tags {
            post.tags = tags;
        }
        if let Some(featured) = params.featured {
            post.featured = featured;
        }
        if let Some(trending) = params.trending {
            post.trending = trending;
        }

        Ok(post.clone())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), RepoError> {
        {
            let mut posts = self.posts.write().await;
            let index = posts
                .iter()
                .position(|post| post.id == *id)
                .ok_or(RepoError::NotFound)?;
            posts.remove(index);
        }

        // The thread goes with the post.
        let mut comments = self.comments.write().await;
        comments.retain(|comment| comment.post_id != *id);
        Ok(())
    }
}
