use chrono::{Duration, Utc};
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use crate::database::entity::media_post;
use crate::database::postgres_repo::PostgresMediaPostRepository;
use postboard_core::domain::{FileType, MediaPost, NewMediaPost};
use postboard_core::ports::{BaseRepository, MediaPostRepository};

fn model(caption: &str, minutes_ago: i64) -> media_post::Model {
    media_post::Model {
        id: Uuid::new_v4(),
        caption: caption.to_owned(),
        url: format!("https://ik.imagekit.io/demo/{caption}.jpg"),
        file_type: media_post::FileType::Image,
        file_name: format!("{caption}_a1b2.jpg"),
        created_at: (Utc::now() - Duration::minutes(minutes_ago)).into(),
    }
}

#[tokio::test]
async fn test_insert_media_post_returns_stored_row() {
    let post = MediaPost::new(NewMediaPost {
        caption: "test".to_owned(),
        url: "https://ik.imagekit.io/demo/cat.mp4".to_owned(),
        file_type: FileType::Video,
        file_name: "cat_x1.mp4".to_owned(),
    });

    let stored = media_post::Model {
        id: post.id,
        caption: post.caption.clone(),
        url: post.url.clone(),
        file_type: media_post::FileType::Video,
        file_name: post.file_name.clone(),
        created_at: post.created_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .into_connection();

    let repo = PostgresMediaPostRepository::new(db);

    let saved = repo.insert(post.clone()).await.unwrap();

    assert_eq!(saved.id, post.id);
    assert_eq!(saved.caption, "test");
    assert_eq!(saved.file_type, FileType::Video);
    assert_eq!(saved.created_at, post.created_at);
}

#[tokio::test]
async fn test_list_recent_maps_rows_in_query_order() {
    let newest = model("newest", 0);
    let oldest = model("oldest", 10);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![newest.clone(), oldest.clone()]])
        .into_connection();

    let repo = PostgresMediaPostRepository::new(db);

    let feed = repo.list_recent().await.unwrap();

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].id, newest.id);
    assert_eq!(feed[0].file_type, FileType::Image);
    assert_eq!(feed[1].caption, "oldest");
}

#[tokio::test]
async fn test_list_recent_orders_by_created_at_desc() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<media_post::Model>::new()])
        .into_connection();

    let repo = PostgresMediaPostRepository::new(db);
    assert!(repo.list_recent().await.unwrap().is_empty());

    let log = repo.db.into_transaction_log();
    let sql = format!("{:?}", log);
    assert!(sql.contains("ORDER BY"));
    assert!(sql.contains("created_at"));
    assert!(sql.contains("DESC"));
}
