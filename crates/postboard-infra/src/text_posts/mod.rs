//! Text post store implementations.

mod memory;

pub use memory::{InMemoryTextPostStore, seed_posts};
