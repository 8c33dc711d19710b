use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, TransactionTrait,
};

use postboard_core::error::RepoError;
use postboard_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T> BaseRepository<T> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        // Dropping the transaction without commit rolls it back.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        let active_model: E::ActiveModel = entity.into();
        let model = active_model
            .insert(&txn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Transaction(e.to_string()))?;

        Ok(model.into())
    }
}
