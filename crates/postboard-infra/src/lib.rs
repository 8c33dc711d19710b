//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! This crate contains the database, text post store, and media store integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod media_store;
pub mod text_posts;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryMediaPostRepository};
pub use text_posts::InMemoryTextPostStore;

// Re-exports - Media store
pub use media_store::{ImageKitConfig, ImageKitMediaStore, UnconfiguredMediaStore};

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresMediaPostRepository};
