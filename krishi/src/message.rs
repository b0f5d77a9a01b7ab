//! Conversation message types shared by the prompt builders and the
//! completion client.
//!
//! The wire shapes here mirror the remote chat-completion schema exactly:
//! a message is `{ role, content }` where `content` is either a plain
//! string or an ordered list of tagged parts (text, image reference, or
//! file attachment).

use serde::{Deserialize, Serialize};

/// The role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Persona and guidelines for the model.
    System,
    /// Input from the farmer or the surrounding application.
    User,
    /// A prior model response.
    Assistant,
}

/// A reference to an image by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The image location (https or data URL).
    pub url: String,
}

/// An inline file attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Original file name.
    pub filename: String,
    /// File contents, base64-encoded by the caller.
    pub file_data: String,
}

/// One part of a multi-part message body.
///
/// Serializes to the remote schema's tagged shape, e.g.
/// `{"type": "image_url", "image_url": {"url": "..."}}`. Exactly one
/// variant is populated per part; serialization is exhaustive over the
/// variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text {
        /// The text itself.
        text: String,
    },
    /// An image referenced by URL.
    ImageUrl {
        /// The image reference.
        image_url: ImageUrl,
    },
    /// An attached file.
    File {
        /// The attachment.
        file: FileAttachment,
    },
}

impl ContentPart {
    /// Create a text part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image part from a URL.
    #[must_use]
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }

    /// Create a file part from a filename and base64-encoded data.
    #[must_use]
    pub fn file(filename: impl Into<String>, file_data: impl Into<String>) -> Self {
        Self::File {
            file: FileAttachment {
                filename: filename.into(),
                file_data: file_data.into(),
            },
        }
    }
}

/// The body of a message: plain text or an ordered sequence of parts.
///
/// Untagged so that plain-text messages serialize as a bare JSON string,
/// which is what the remote service expects for the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// A plain-text body.
    Text(String),
    /// A multi-part body (text, images, files) in order.
    Parts(Vec<ContentPart>),
}

/// A single conversation turn.
///
/// Immutable value object: construct it, send it, discard it. The prompt
/// builders produce these and [`CompletionClient`](crate::CompletionClient)
/// consumes them; nothing mutates a message after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking.
    pub role: MessageRole,
    /// What they said.
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a system message with plain-text content.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a user message with plain-text content.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create an assistant message with plain-text content.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create a user message from ordered content parts.
    #[must_use]
    pub fn user_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// The plain-text body, if this message has one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(MessageRole::System).unwrap(),
            json!("system")
        );
        assert_eq!(
            serde_json::to_value(MessageRole::User).unwrap(),
            json!("user")
        );
        assert_eq!(
            serde_json::to_value(MessageRole::Assistant).unwrap(),
            json!("assistant")
        );
    }

    #[test]
    fn test_plain_text_message_wire_shape() {
        let msg = ChatMessage::user("What should I plant?");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({"role": "user", "content": "What should I plant?"})
        );
    }

    #[test]
    fn test_text_part_wire_shape() {
        let part = ContentPart::text("leaf close-up attached");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "leaf close-up attached"}));
    }

    #[test]
    fn test_image_part_wire_shape() {
        let part = ContentPart::image_url("https://example.com/leaf.jpg");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image_url",
                "image_url": {"url": "https://example.com/leaf.jpg"}
            })
        );
    }

    #[test]
    fn test_file_part_wire_shape() {
        let part = ContentPart::file("soil_report.pdf", "aGVsbG8=");
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "file",
                "file": {"filename": "soil_report.pdf", "file_data": "aGVsbG8="}
            })
        );
    }

    #[test]
    fn test_multi_part_message_wire_shape() {
        let msg = ChatMessage::user_parts(vec![
            ContentPart::text("diagnose this"),
            ContentPart::image_url("https://example.com/leaf.jpg"),
        ]);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "diagnose this"},
                    {"type": "image_url", "image_url": {"url": "https://example.com/leaf.jpg"}}
                ]
            })
        );
    }

    #[test]
    fn test_text_accessor() {
        assert_eq!(ChatMessage::system("persona").text(), Some("persona"));
        assert_eq!(
            ChatMessage::user_parts(vec![ContentPart::text("hi")]).text(),
            None
        );
    }
}
