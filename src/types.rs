use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Which carousel deck an annotated assistant message carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideContentKind {
    Service,
    Case,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_content: Option<SideContentKind>,
    #[serde(skip)]
    pub created_at: Option<OffsetDateTime>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            side_content: None,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            side_content: None,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn assistant_with_side_content(
        content: impl Into<String>,
        kind: Option<SideContentKind>,
    ) -> Self {
        Self {
            side_content: kind,
            ..Self::assistant(content)
        }
    }

    pub fn shows_side_content(&self) -> bool {
        self.side_content.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}
