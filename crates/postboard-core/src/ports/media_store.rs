//! Media store port - abstraction over the external file hosting service.

use std::path::Path;

use async_trait::async_trait;

use crate::error::MediaStoreError;

/// A spooled upload ready to be forwarded to the media store.
#[derive(Debug, Clone, Copy)]
pub struct MediaUpload<'a> {
    /// Local file holding the upload body.
    pub path: &'a Path,
    /// File name supplied by the client.
    pub file_name: &'a str,
    /// Content type supplied by the client, if any.
    pub content_type: Option<&'a str>,
}

/// What the media store reports back for an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Public URL of the hosted file.
    pub url: String,
    /// Canonical name assigned by the media store.
    pub name: String,
}

/// Media store trait - hosts uploaded files and hands back public URLs.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, upload: MediaUpload<'_>) -> Result<StoredMedia, MediaStoreError>;
}
