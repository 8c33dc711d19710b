//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use postboard_core::domain::MediaPost;
use postboard_core::error::RepoError;
use postboard_core::ports::MediaPostRepository;

use super::entity::media_post::{self, Entity as MediaPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL media post repository.
pub type PostgresMediaPostRepository = PostgresBaseRepository<MediaPostEntity>;

#[async_trait]
impl MediaPostRepository for PostgresMediaPostRepository {
    async fn list_recent(&self) -> Result<Vec<MediaPost>, RepoError> {
        tracing::debug!("Loading media feed");

        let result = MediaPostEntity::find()
            .order_by_desc(media_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
