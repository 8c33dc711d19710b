//! In-memory text post store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewTextPost, TextPost};
use postboard_core::ports::TextPostStore;

/// Posts every fresh store starts with.
pub fn seed_posts() -> Vec<TextPost> {
    [
        ("New Post", "Cool test post"),
        ("Python Tip", "Use list comprehensions for cleaner loops."),
        ("Daily Motivation", "Consistency beats intensity every time."),
        (
            "Fun Fact",
            "The first computer bug was an actual moth found in a Harvard Mark II.",
        ),
        (
            "Update",
            "Just launched my new project! Excited to share more soon.",
        ),
        (
            "Tech Insight",
            "Async IO in Python can massively speed up I/O-bound tasks.",
        ),
        (
            "Quote",
            "Programs must be written for people to read, and only incidentally for machi",
        ),
        (
            "Weekend Plans",
            "Might finally clean up my GitHub repos... or just play some Minecraft",
        ),
        (
            "Question",
            "What's the most underrated Python library you've ever used?",
        ),
        (
            "Mini Announcement",
            "New video drops tomorrow—covering the weirdest Python features!!",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, content), id)| NewTextPost::new(title, content).with_id(id))
    .collect()
}

/// Text posts keyed by id behind an async RwLock.
///
/// Ids are handed out as `max + 1`, so id order is insertion order.
/// Note: Data is lost on process restart.
pub struct InMemoryTextPostStore {
    posts: RwLock<BTreeMap<i64, TextPost>>,
}

impl InMemoryTextPostStore {
    /// A store holding the seed posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub fn with_posts(posts: impl IntoIterator<Item = TextPost>) -> Self {
        Self {
            posts: RwLock::new(posts.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl Default for InMemoryTextPostStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl TextPostStore for InMemoryTextPostStore {
    async fn list(&self, limit: Option<usize>) -> Vec<TextPost> {
        let posts = self.posts.read().await;
        let take = match limit {
            // zero means "no limit"
            Some(n) if n > 0 => n,
            _ => posts.len(),
        };
        posts.values().take(take).cloned().collect()
    }

    async fn get(&self, id: i64) -> Option<TextPost> {
        self.posts.read().await.get(&id).cloned()
    }

    async fn create(&self, post: NewTextPost) -> TextPost {
        // Hold the write lock across id allocation and insert.
        let mut posts = self.posts.write().await;
        let id = posts.keys().next_back().map_or(1, |max| max + 1);
        let post = post.with_id(id);
        posts.insert(id, post.clone());
        tracing::debug!(post_id = id, "Text post created");
        post
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_list_without_limit_returns_seed_in_order() {
        let store = InMemoryTextPostStore::seeded();
        let posts = store.list(None).await;
        assert_eq!(posts.len(), 10);
        assert_eq!(posts, seed_posts());
        assert_eq!(posts[0].title, "New Post");
        assert_eq!(posts[9].title, "Mini Announcement");
    }

    #[tokio::test]
    async fn test_list_with_limit_returns_prefix() {
        let store = InMemoryTextPostStore::seeded();
        let posts = store.list(Some(3)).await;
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_zero_limit_means_everything() {
        let store = InMemoryTextPostStore::seeded();
        assert_eq!(store.list(Some(0)).await.len(), 10);
    }

    #[tokio::test]
    async fn test_limit_larger_than_table() {
        let store = InMemoryTextPostStore::seeded();
        assert_eq!(store.list(Some(500)).await.len(), 10);
    }

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let store = InMemoryTextPostStore::seeded();
        let post = store.get(1).await.unwrap();
        assert_eq!(post.title, "New Post");
        assert_eq!(post.content, "Cool test post");
        assert!(store.get(999).await.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let store = InMemoryTextPostStore::seeded();
        let created = store.create(NewTextPost::new("X", "Y")).await;
        assert_eq!(created.id, 11);
        assert_eq!(store.get(11).await, Some(created));
        assert_eq!(store.list(None).await.last().unwrap().title, "X");
    }

    #[tokio::test]
    async fn test_create_on_empty_store_starts_at_one() {
        let store = InMemoryTextPostStore::with_posts(Vec::new());
        let created = store.create(NewTextPost::new("first", "post")).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(InMemoryTextPostStore::seeded());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(NewTextPost::new(format!("t{i}"), "c"))
                        .await
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (11..=30).collect::<Vec<i64>>());
    }
}
