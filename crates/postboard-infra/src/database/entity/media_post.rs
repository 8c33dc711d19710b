//! Media post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use postboard_core::domain;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub caption: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub file_type: FileType,
    pub file_name: String,
    pub created_at: DateTimeWithTimeZone,
}

/// Stored as plain text so new media kinds need no enum migration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum FileType {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<FileType> for domain::FileType {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Image => domain::FileType::Image,
            FileType::Video => domain::FileType::Video,
        }
    }
}

impl From<domain::FileType> for FileType {
    fn from(value: domain::FileType) -> Self {
        match value {
            domain::FileType::Image => FileType::Image,
            domain::FileType::Video => FileType::Video,
        }
    }
}

/// Conversion from SeaORM Model to Domain MediaPost.
impl From<Model> for domain::MediaPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            caption: model.caption,
            url: model.url,
            file_type: model.file_type.into(),
            file_name: model.file_name,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain MediaPost to SeaORM ActiveModel.
impl From<domain::MediaPost> for ActiveModel {
    fn from(post: domain::MediaPost) -> Self {
        Self {
            id: Set(post.id),
            caption: Set(post.caption),
            url: Set(post.url),
            file_type: Set(post.file_type.into()),
            file_name: Set(post.file_name),
            created_at: Set(post.created_at.into()),
        }
    }
}
