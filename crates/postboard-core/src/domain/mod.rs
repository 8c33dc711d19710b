//! Domain entities - the core business objects.

mod media_post;
mod text_post;

pub use media_post::{FileType, MediaPost, NewMediaPost};
pub use text_post::{NewTextPost, TextPost};
