//! Data Transfer Objects - request/response types for the API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use postboard_core::domain::{FileType, MediaPost, NewTextPost, TextPost};

/// Greeting returned by the hello endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string of the text post listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<usize>,
}

/// Request to create a text post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTextPostRequest {
    pub title: String,
    pub content: String,
}

impl From<CreateTextPostRequest> for NewTextPost {
    fn from(req: CreateTextPostRequest) -> Self {
        NewTextPost::new(req.title, req.content)
    }
}

/// Public view of a text post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPostResponse {
    pub title: String,
    pub content: String,
}

impl From<TextPost> for TextPostResponse {
    fn from(post: TextPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
        }
    }
}

/// Text post listing: a plain page when a positive limit was given,
/// otherwise every post keyed by id (serialized in id order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextPostListing {
    Page(Vec<TextPostResponse>),
    All(BTreeMap<i64, TextPostResponse>),
}

impl TextPostListing {
    pub fn page(posts: Vec<TextPost>) -> Self {
        TextPostListing::Page(posts.into_iter().map(Into::into).collect())
    }

    pub fn all(posts: Vec<TextPost>) -> Self {
        TextPostListing::All(posts.into_iter().map(|p| (p.id, p.into())).collect())
    }
}

/// Public view of a media post. Id and timestamp are rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPostResponse {
    pub id: String,
    pub caption: String,
    pub url: String,
    pub file_type: FileType,
    pub file_name: String,
    pub created_at: String,
}

impl From<MediaPost> for MediaPostResponse {
    fn from(post: MediaPost) -> Self {
        Self {
            id: post.id.to_string(),
            caption: post.caption,
            url: post.url,
            file_type: post.file_type,
            file_name: post.file_name,
            created_at: post.created_at.to_rfc3339(),
        }
    }
}

/// Media feed, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub posts: Vec<MediaPostResponse>,
}
