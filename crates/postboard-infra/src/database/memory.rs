//! In-memory media post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::MediaPost;
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, MediaPostRepository};

/// Media posts kept in a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryMediaPostRepository {
    posts: RwLock<Vec<MediaPost>>,
}

impl InMemoryMediaPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<MediaPost> for InMemoryMediaPostRepository {
    async fn insert(&self, entity: MediaPost) -> Result<MediaPost, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl MediaPostRepository for InMemoryMediaPostRepository {
    async fn list_recent(&self) -> Result<Vec<MediaPost>, RepoError> {
        let posts = self.posts.read().await;
        // Later inserts win ties on equal timestamps.
        let mut recent: Vec<MediaPost> = posts.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(recent)
    }
}
