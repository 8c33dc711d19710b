use async_trait::async_trait;

use postboard_core::error::MediaStoreError;
use postboard_core::ports::{MediaStore, MediaUpload, StoredMedia};

/// Media store used when no hosting credentials are configured.
/// Every upload fails, so no media post is ever recorded.
pub struct UnconfiguredMediaStore;

#[async_trait]
impl MediaStore for UnconfiguredMediaStore {
    async fn upload(&self, upload: MediaUpload<'_>) -> Result<StoredMedia, MediaStoreError> {
        tracing::warn!(file_name = %upload.file_name, "Upload rejected - media store not configured");
        Err(MediaStoreError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[tokio::test]
    async fn test_upload_always_fails() {
        let upload = MediaUpload {
            path: Path::new("/tmp/does-not-matter.png"),
            file_name: "cat.png",
            content_type: Some("image/png"),
        };
        let err = UnconfiguredMediaStore.upload(upload).await.unwrap_err();
        assert!(matches!(err, MediaStoreError::NotConfigured));
    }
}
