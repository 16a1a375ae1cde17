//! Role-tagged chat messages and multimodal content parts.
//!
//! Messages follow the chat completion API conventions: an ordered sequence
//! of role-tagged parts, where user content may mix text and images.

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing instructions.
    System,
    /// User message.
    User,
    /// Assistant (model) message.
    Assistant,
}

impl Role {
    /// Get the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Content of a message: plain text or an array of multimodal parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text content.
    Text(String),
    /// Multimodal content parts (text and images).
    Parts(Vec<ContentPart>),
}

impl Content {
    /// Get the text if this is plain text content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(_) => None,
        }
    }

    /// Number of parts (1 for plain text).
    #[must_use]
    pub fn part_count(&self) -> usize {
        match self {
            Self::Text(_) => 1,
            Self::Parts(parts) => parts.len(),
        }
    }
}

/// A single content part in a multimodal message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text part.
    Text {
        /// The text content.
        text: String,
    },
    /// Image part, referenced by URL or embedded as a data URL.
    ImageUrl {
        /// The image URL details.
        image_url: ImageUrl,
    },
}

impl ContentPart {
    /// Create a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image part from a URL or data URL.
    #[must_use]
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: None,
            },
        }
    }

    /// Check if this is an image part.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::ImageUrl { .. })
    }
}

/// Image URL structure with an optional detail level for vision APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The URL of the image (http(s) URL or data URL).
    pub url: String,
    /// Detail level for image processing: "low", "high", or "auto".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A chat message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender.
    pub role: Role,
    /// Content of the message.
    pub content: Content,
}

impl Message {
    /// Create a new system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Content::Text(content.into()),
        }
    }

    /// Create a new user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Content::Text(content.into()),
        }
    }

    /// Create a new user message from multimodal parts.
    #[must_use]
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content: Content::Parts(parts),
        }
    }

    /// Create a new assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Content::Text(content.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod role {
        use super::*;

        #[test]
        fn as_str_returns_correct_values() {
            assert_eq!(Role::System.as_str(), "system");
            assert_eq!(Role::User.as_str(), "user");
            assert_eq!(Role::Assistant.as_str(), "assistant");
        }

        #[test]
        fn serde_uses_lowercase() {
            assert_eq!(serde_json::to_string(&Role::System).unwrap(), r#""system""#);
            assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        }
    }

    mod content {
        use super::*;

        #[test]
        fn text_serializes_as_bare_string() {
            let content = Content::Text("hello".into());
            assert_eq!(serde_json::to_string(&content).unwrap(), r#""hello""#);
        }

        #[test]
        fn parts_serialize_as_array() {
            let content = Content::Parts(vec![
                ContentPart::text("describe this"),
                ContentPart::image_url("data:image/png;base64,AQID"),
            ]);

            let json: serde_json::Value = serde_json::to_value(&content).unwrap();
            let arr = json.as_array().unwrap();

            assert_eq!(arr.len(), 2);
            assert_eq!(arr[0]["type"], "text");
            assert_eq!(arr[1]["type"], "image_url");
            assert_eq!(arr[1]["image_url"]["url"], "data:image/png;base64,AQID");
        }

        #[test]
        fn as_text_only_for_plain_text() {
            assert_eq!(Content::Text("x".into()).as_text(), Some("x"));
            assert!(Content::Parts(vec![ContentPart::text("x")]).as_text().is_none());
        }

        #[test]
        fn part_count() {
            assert_eq!(Content::Text("x".into()).part_count(), 1);
            let parts = Content::Parts(vec![
                ContentPart::text("a"),
                ContentPart::image_url("u1"),
                ContentPart::image_url("u2"),
            ]);
            assert_eq!(parts.part_count(), 3);
        }
    }

    mod content_part {
        use super::*;

        #[test]
        fn image_url_detail_skipped_when_none() {
            let part = ContentPart::image_url("https://example.com/a.png");
            let json = serde_json::to_string(&part).unwrap();

            assert!(!json.contains("detail"));
            assert!(part.is_image());
        }

        #[test]
        fn text_part_is_not_image() {
            assert!(!ContentPart::text("x").is_image());
        }
    }

    mod message {
        use super::*;

        #[test]
        fn constructors_set_roles() {
            assert_eq!(Message::system("s").role, Role::System);
            assert_eq!(Message::user("u").role, Role::User);
            assert_eq!(Message::assistant("a").role, Role::Assistant);
            assert_eq!(Message::user_parts(vec![]).role, Role::User);
        }

        #[test]
        fn serde_roundtrip() {
            let msg = Message::user_parts(vec![
                ContentPart::text("what is this?"),
                ContentPart::image_url("data:image/jpeg;base64,//4="),
            ]);

            let json = serde_json::to_string(&msg).unwrap();
            let parsed: Message = serde_json::from_str(&json).unwrap();

            assert_eq!(parsed.role, Role::User);
            assert_eq!(parsed.content.part_count(), 2);
        }
    }
}
