use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MediaPosts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(MediaPosts::Caption)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(MediaPosts::Url).text().not_null())
                    .col(ColumnDef::new(MediaPosts::FileType).text().not_null())
                    .col(ColumnDef::new(MediaPosts::FileName).string().not_null())
                    .col(
                        ColumnDef::new(MediaPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_posts_created_at")
                    .table(MediaPosts::Table)
                    .col(MediaPosts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MediaPosts {
    Table,
    Id,
    Caption,
    Url,
    FileType,
    FileName,
    CreatedAt,
}
