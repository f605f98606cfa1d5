use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) post_id: i64,
    pub(crate) author_id: i64,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CommentContentRequest {
    pub(crate) content: String,
}

impl CommentContentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation {
                field: "content",
                message: "must not be empty",
            });
        }
        Ok(Self {
            content: content.to_string(),
        })
    }
}
