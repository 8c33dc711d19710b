//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{MediaPostRepository, MediaStore, TextPostStore};
use postboard_infra::{
    ImageKitMediaStore, InMemoryMediaPostRepository, InMemoryTextPostStore,
    UnconfiguredMediaStore,
};

use crate::config::AppConfig;

/// Shared application state. Every collaborator a handler needs is passed
/// in here explicitly.
#[derive(Clone)]
pub struct AppState {
    pub text_posts: Arc<dyn TextPostStore>,
    pub media_posts: Arc<dyn MediaPostRepository>,
    pub media_store: Arc<dyn MediaStore>,
}

impl AppState {
    pub fn new(
        text_posts: Arc<dyn TextPostStore>,
        media_posts: Arc<dyn MediaPostRepository>,
        media_store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            text_posts,
            media_posts,
            media_store,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// Fails only when a configured database cannot be migrated; serving
    /// against an unmigrated schema would lose every upload.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let text_posts: Arc<dyn TextPostStore> = Arc::new(InMemoryTextPostStore::seeded());
        let media_posts = media_post_repository(config).await?;
        let media_store = media_store(config);

        tracing::info!("Application state initialized");

        Ok(Self::new(text_posts, media_posts, media_store))
    }
}

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[cfg(feature = "postgres")]
    #[error("Failed to apply database migrations: {0}")]
    Migration(String),
}

fn media_store(config: &AppConfig) -> Arc<dyn MediaStore> {
    match config.media_store.clone().map(ImageKitMediaStore::new) {
        Some(Ok(store)) => Arc::new(store),
        Some(Err(e)) => {
            tracing::error!("Failed to build media store client: {}. Uploads disabled.", e);
            Arc::new(UnconfiguredMediaStore)
        }
        None => {
            tracing::warn!("IMAGEKIT_PRIVATE_KEY not set. Uploads will fail.");
            Arc::new(UnconfiguredMediaStore)
        }
    }
}

#[cfg(feature = "postgres")]
async fn media_post_repository(
    config: &AppConfig,
) -> Result<Arc<dyn MediaPostRepository>, StartupError> {
    use postboard_infra::DatabasePool;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Arc::new(InMemoryMediaPostRepository::new()));
    };

    match DatabasePool::connect(db_config).await {
        Ok(pool) => postgres_repository(pool, config.run_migrations).await,
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback; \
                 media posts will not survive a restart.",
                e
            );
            Ok(Arc::new(InMemoryMediaPostRepository::new()))
        }
    }
}

/// Migrate (when enabled) and wrap the pool in the Postgres repository.
#[cfg(feature = "postgres")]
async fn postgres_repository(
    pool: postboard_infra::DatabasePool,
    run_migrations: bool,
) -> Result<Arc<dyn MediaPostRepository>, StartupError> {
    use migration::{Migrator, MigratorTrait};
    use postboard_infra::PostgresMediaPostRepository;

    if run_migrations {
        Migrator::up(&pool.conn, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresMediaPostRepository::new(pool.conn)))
}

#[cfg(not(feature = "postgres"))]
async fn media_post_repository(
    _config: &AppConfig,
) -> Result<Arc<dyn MediaPostRepository>, StartupError> {
    tracing::info!("Running without postgres feature - using in-memory repository");
    Ok(Arc::new(InMemoryMediaPostRepository::new()))
}

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use postboard_infra::DatabasePool;

    use super::*;

    #[tokio::test]
    async fn test_failed_migration_stops_startup() {
        // No canned results, so every migration statement errors.
        let pool = DatabasePool {
            conn: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        };

        let err = postgres_repository(pool, true).await.err().unwrap();
        assert!(matches!(err, StartupError::Migration(_)));
    }

    #[tokio::test]
    async fn test_migrations_can_be_skipped() {
        let pool = DatabasePool {
            conn: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        };

        assert!(postgres_repository(pool, false).await.is_ok());
    }
}
