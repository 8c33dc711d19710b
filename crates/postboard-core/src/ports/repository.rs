use async_trait::async_trait;

use crate::domain::MediaPost;
use crate::error::RepoError;

/// Generic repository trait for append-only entities.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Insert an entity in its own unit of work and return the stored row.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Media post repository.
#[async_trait]
pub trait MediaPostRepository: BaseRepository<MediaPost> {
    /// All media posts, most recent first.
    async fn list_recent(&self) -> Result<Vec<MediaPost>, RepoError>;
}
