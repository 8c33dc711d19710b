use serde::{Deserialize, Serialize};

/// Text post - a short in-memory post with a title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPost {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Fields supplied when creating a text post. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTextPost {
    pub title: String,
    pub content: String,
}

impl NewTextPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Attach an id, producing the stored post.
    pub fn with_id(self, id: i64) -> TextPost {
        TextPost {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
