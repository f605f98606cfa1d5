use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UpdatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
        })
    }
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() || title.len() > 255 {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..255 chars",
        });
    }
    Ok(title.to_string())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation {
            field: "content",
            message: "must not be empty",
        });
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::{CreatePostRequest, DomainError, UpdatePostRequest};

    #[test]
    fn create_request_rejects_blank_title() {
        let req = CreatePostRequest {
            title: "   ".to_string(),
            content: "body".to_string(),
        };

        let err = req.validate().expect_err("blank title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn update_request_rejects_blank_content() {
        let req = UpdatePostRequest {
            title: "title".to_string(),
            content: "   ".to_string(),
        };

        let err = req.validate().expect_err("blank content must be rejected");
        assert_validation_field(err, "content");
    }

    #[test]
    fn create_request_trims_fields() {
        let req = CreatePostRequest {
            title: "  Hello  ".to_string(),
            content: "  World  ".to_string(),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.title, "Hello");
        assert_eq!(validated.content, "World");
    }

    #[test]
    fn create_request_rejects_overlong_title() {
        let req = CreatePostRequest {
            title: "x".repeat(256),
            content: "body".to_string(),
        };

        let err = req.validate().expect_err("overlong title must be rejected");
        assert_validation_field(err, "title");
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
