use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of media hosted by the media store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Video,
}

impl FileType {
    /// Classify an upload by its content type. Anything that is not `video/*`
    /// is treated as an image, including a missing content type.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(ct) if ct.starts_with("video/") => FileType::Video,
            _ => FileType::Image,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media post - metadata of a file hosted by the media store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPost {
    pub id: Uuid,
    pub caption: String,
    pub url: String,
    pub file_type: FileType,
    pub file_name: String,
    pub created_at: DateTime<Utc>,
}

/// Media post fields known once the media store has accepted an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMediaPost {
    pub caption: String,
    pub url: String,
    pub file_type: FileType,
    pub file_name: String,
}

impl MediaPost {
    /// Create a new media post with a generated id and insert timestamp.
    pub fn new(new: NewMediaPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            caption: new.caption,
            url: new.url,
            file_type: new.file_type,
            file_name: new.file_name,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_content_type_is_video() {
        assert_eq!(
            FileType::from_content_type(Some("video/mp4")),
            FileType::Video
        );
        assert_eq!(
            FileType::from_content_type(Some("video/quicktime")),
            FileType::Video
        );
    }

    #[test]
    fn test_everything_else_is_image() {
        assert_eq!(
            FileType::from_content_type(Some("image/png")),
            FileType::Image
        );
        assert_eq!(
            FileType::from_content_type(Some("application/octet-stream")),
            FileType::Image
        );
        // prefix match only
        assert_eq!(
            FileType::from_content_type(Some("text/video/")),
            FileType::Image
        );
        assert_eq!(FileType::from_content_type(None), FileType::Image);
    }

    #[test]
    fn test_file_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FileType::Video).unwrap(),
            "\"video\""
        );
        assert_eq!(FileType::Image.to_string(), "image");
    }
}
