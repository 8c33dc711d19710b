use async_trait::async_trait;

use crate::domain::{NewTextPost, TextPost};

/// Store for text posts, kept in insertion order.
#[async_trait]
pub trait TextPostStore: Send + Sync {
    /// The first `limit` posts, or every post when `limit` is `None` or zero.
    async fn list(&self, limit: Option<usize>) -> Vec<TextPost>;

    /// Look up a post by id.
    async fn get(&self, id: i64) -> Option<TextPost>;

    /// Append a post with the next free id.
    async fn create(&self, post: NewTextPost) -> TextPost;
}
