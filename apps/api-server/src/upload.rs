//! Multipart upload handling - spools the `file` part to a temporary file.
//!
//! The temporary file is owned by [`SpooledFile`] and removed when it is
//! dropped, so every exit path of a request cleans up after itself.

use std::path::Path;

use actix_multipart::{Field, Multipart, MultipartError};
use futures::TryStreamExt;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use postboard_core::error::{MediaStoreError, RepoError};
use postboard_core::ports::MediaUpload;

/// Errors raised anywhere in the upload pipeline.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to read multipart payload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Failed to spool upload: {0}")]
    Io(#[from] std::io::Error),

    #[error("Caption is not valid UTF-8")]
    InvalidCaption,

    #[error(transparent)]
    MediaStore(#[from] MediaStoreError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// An uploaded file spooled to disk.
#[derive(Debug)]
pub struct SpooledFile {
    file: NamedTempFile,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
}

impl SpooledFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn as_media_upload(&self) -> MediaUpload<'_> {
        MediaUpload {
            path: self.path(),
            file_name: &self.file_name,
            content_type: self.content_type.as_deref(),
        }
    }
}

/// Parsed upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<SpooledFile>,
    pub caption: String,
}

/// Read the whole multipart payload. The payload is consumed and dropped
/// before this returns.
pub async fn read_form(mut payload: Multipart) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(mut field) = payload.try_next().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => form.file = Some(spool(&mut field).await?),
            Some("caption") => {
                let bytes = collect(&mut field).await?;
                form.caption = String::from_utf8(bytes).map_err(|_| UploadError::InvalidCaption)?;
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown form field");
                while field.try_next().await?.is_some() {}
            }
        }
    }

    Ok(form)
}

async fn collect(field: &mut Field) -> Result<Vec<u8>, UploadError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await? {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn spool(field: &mut Field) -> Result<SpooledFile, UploadError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or("upload")
        .to_owned();
    let content_type = field.content_type().map(|m| m.essence_str().to_owned());

    let temp = tempfile::Builder::new()
        .prefix("postboard-")
        .suffix(&suffix_for(&file_name))
        .tempfile()?;

    let mut out = tokio::fs::File::from_std(temp.reopen()?);
    let mut size = 0;
    while let Some(chunk) = field.try_next().await? {
        size += chunk.len();
        out.write_all(&chunk).await?;
    }
    out.flush().await?;

    tracing::debug!(
        file_name = %file_name,
        content_type = ?content_type,
        size,
        path = %temp.path().display(),
        "Upload spooled to temporary file"
    );

    Ok(SpooledFile {
        file: temp,
        file_name,
        content_type,
        size,
    })
}

/// Temporary file suffix matching the client's file extension, e.g. `.png`.
fn suffix_for(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}
