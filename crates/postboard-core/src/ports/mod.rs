//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod media_store;
mod repository;
mod text_posts;

pub use media_store::{MediaStore, MediaUpload, StoredMedia};
pub use repository::{BaseRepository, MediaPostRepository};
pub use text_posts::TextPostStore;
