use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the coach transcript. Append-only; never mutated
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Optional image attachment as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Task suggestions the user can add one by one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: text.into(),
            image: None,
            suggestions: None,
        }
    }

    pub fn user_with_image(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Self::user(text)
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: text.into(),
            image: None,
            suggestions: None,
        }
    }

    pub fn assistant_with_suggestions(text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            suggestions: Some(suggestions),
            ..Self::assistant(text)
        }
    }
}
