use async_trait::async_trait;

use crate::application::repos::{AuthorsRepo, RepoError};
use crate::domain::entities::AuthorRecord;
use crate::domain::types::AuthorId;

use super::MemoryCatalog;

#[async_trait]
impl AuthorsRepo for MemoryCatalog {
    async fn list_authors(&self) -> Result<Vec<AuthorRecord>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors.clone())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<AuthorRecord>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|author| author.id == *id).cloned())
    }
}
