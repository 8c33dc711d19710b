//! ImageKit media store client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use postboard_core::error::MediaStoreError;
use postboard_core::ports::{MediaStore, MediaUpload, StoredMedia};

const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// ImageKit connection configuration.
#[derive(Debug, Clone)]
pub struct ImageKitConfig {
    /// Private API key, sent as the basic-auth user name.
    pub private_key: String,
    /// Upload endpoint.
    pub upload_url: String,
    /// Tags attached to every upload.
    pub tags: Vec<String>,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ImageKitConfig {
    pub fn new(private_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            tags: vec!["backend-upload".to_string()],
            timeout: None,
        }
    }

    /// Load configuration from environment variables.
    /// Returns `None` when `IMAGEKIT_PRIVATE_KEY` is not set.
    pub fn from_env() -> Option<Self> {
        let private_key = std::env::var("IMAGEKIT_PRIVATE_KEY").ok()?;
        let mut config = Self::new(private_key);

        if let Ok(url) = std::env::var("IMAGEKIT_UPLOAD_URL") {
            config.upload_url = url;
        }
        config.timeout = std::env::var("IMAGEKIT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        Some(config)
    }
}

/// Successful upload response; ImageKit sends more fields than these.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Media store backed by the ImageKit upload API.
pub struct ImageKitMediaStore {
    client: reqwest::Client,
    config: ImageKitConfig,
}

impl ImageKitMediaStore {
    pub fn new(config: ImageKitConfig) -> Result<Self, MediaStoreError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MediaStoreError::Transport(e.to_string()))?;

        tracing::info!(upload_url = %config.upload_url, "ImageKit media store configured");

        Ok(Self { client, config })
    }

    fn form(&self, upload: &MediaUpload<'_>, body: Vec<u8>) -> Result<Form, MediaStoreError> {
        let mut part = Part::bytes(body).file_name(upload.file_name.to_string());
        if let Some(content_type) = upload.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| MediaStoreError::Transport(e.to_string()))?;
        }

        Ok(Form::new()
            .part("file", part)
            .text("fileName", upload.file_name.to_string())
            .text("useUniqueFileName", "true")
            .text("tags", self.config.tags.join(",")))
    }
}

#[async_trait]
impl MediaStore for ImageKitMediaStore {
    async fn upload(&self, upload: MediaUpload<'_>) -> Result<StoredMedia, MediaStoreError> {
        let body = tokio::fs::read(upload.path).await?;
        let size = body.len();
        let form = self.form(&upload, body)?;

        tracing::debug!(file_name = %upload.file_name, size, "Uploading to ImageKit");

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaStoreError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(MediaStoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let stored: UploadResponse = response
            .json()
            .await
            .map_err(|e| MediaStoreError::Decode(e.to_string()))?;

        tracing::info!(name = %stored.name, url = %stored.url, "Upload accepted by ImageKit");

        Ok(StoredMedia {
            url: stored.url,
            name: stored.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn store_for(server: &MockServer) -> ImageKitMediaStore {
        let mut config = ImageKitConfig::new("private_test_key");
        config.upload_url = format!("{}/api/v1/files/upload", server.uri());
        ImageKitMediaStore::new(config).unwrap()
    }

    fn spooled(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_returns_url_and_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/files/upload"))
            .and(header_exists("authorization"))
            .and(body_string_contains("useUniqueFileName"))
            .and(body_string_contains("backend-upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fileId": "abc123",
                "name": "cat_Xy12.png",
                "url": "https://ik.imagekit.io/demo/cat_Xy12.png",
                "fileType": "image"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let file = spooled(b"fake png bytes");
        let stored = store_for(&server)
            .upload(MediaUpload {
                path: file.path(),
                file_name: "cat.png",
                content_type: Some("image/png"),
            })
            .await
            .unwrap();

        assert_eq!(stored.name, "cat_Xy12.png");
        assert_eq!(stored.url, "https://ik.imagekit.io/demo/cat_Xy12.png");
    }

    #[tokio::test]
    async fn test_rejected_upload_carries_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Your account cannot be authenticated." })),
            )
            .mount(&server)
            .await;

        let file = spooled(b"data");
        let err = store_for(&server)
            .upload(MediaUpload {
                path: file.path(),
                file_name: "cat.png",
                content_type: None,
            })
            .await
            .unwrap_err();

        match err {
            MediaStoreError::Rejected { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Your account cannot be authenticated.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let server = MockServer::start().await;
        let err = store_for(&server)
            .upload(MediaUpload {
                path: std::path::Path::new("/nonexistent/postboard/upload.png"),
                file_name: "upload.png",
                content_type: Some("image/png"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MediaStoreError::Io(_)));
    }

    #[test]
    fn test_default_config() {
        let config = ImageKitConfig::new("key");
        assert_eq!(config.upload_url, DEFAULT_UPLOAD_URL);
        assert_eq!(config.tags, vec!["backend-upload".to_string()]);
        assert!(config.timeout.is_none());
    }
}
