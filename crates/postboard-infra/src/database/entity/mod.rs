//! SeaORM entities.

pub mod media_post;
