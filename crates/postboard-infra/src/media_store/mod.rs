//! Media store implementations - ImageKit and an unconfigured fallback.

mod imagekit;
mod unconfigured;

pub use imagekit::{ImageKitConfig, ImageKitMediaStore};
pub use unconfigured::UnconfiguredMediaStore;
