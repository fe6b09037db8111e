//! Chat-completions wire types.
//!
//! Message content is polymorphic on the wire: a plain JSON string for
//! text-only messages, or an ordered array of typed parts when images are
//! involved. The types here serialize directly into the request body.

use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Target of an `image_url` content part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: String,
}

/// One element of a multimodal message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text { text: value.into() }
    }

    /// Image part with the fixed high-detail hint.
    pub fn image(data_uri: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: data_uri.into(),
                detail: "high".to_string(),
            },
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::ImageUrl { .. })
    }
}

/// Message content: a plain string or an ordered part list.
///
/// Untagged so it serializes as the wire expects — a JSON string for
/// `PlainText`, an array for `Parts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    PlainText(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Canonicalize a part list: an empty list is the empty string, and a
    /// lone text part collapses to the plain-string form. A lone image part
    /// stays a one-element list.
    pub fn from_parts(parts: Vec<ContentPart>) -> Self {
        if parts.is_empty() {
            return Self::PlainText(String::new());
        }
        if parts.len() == 1 {
            if let ContentPart::Text { text } = &parts[0] {
                return Self::PlainText(text.clone());
            }
        }
        Self::Parts(parts)
    }

    /// True if any part is an image.
    pub fn has_image(&self) -> bool {
        match self {
            Self::PlainText(_) => false,
            Self::Parts(parts) => parts.iter().any(ContentPart::is_image),
        }
    }

    /// Concatenated text of all text parts, in order. Used for previews and
    /// for checking whether there is anything worth sending.
    pub fn text_content(&self) -> String {
        match self {
            Self::PlainText(s) => s.clone(),
            Self::Parts(parts) => parts
                .iter()
                .filter_map(|p| match p {
                    ContentPart::Text { text } => Some(text.as_str()),
                    ContentPart::ImageUrl { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    /// True when there is neither text nor an image to send.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PlainText(s) => s.trim().is_empty(),
            Self::Parts(parts) => parts.is_empty(),
        }
    }
}

/// One transcript turn. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(content: MessageContent) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: MessageContent::PlainText(text.into()),
        }
    }
}

/// Parameters resolved per request; never cached across turns.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_serializes_as_json_string() {
        let msg = ChatMessage::user(MessageContent::PlainText("hello".into()));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn parts_serialize_as_typed_array() {
        let content = MessageContent::Parts(vec![
            ContentPart::text("look at this"),
            ContentPart::image("data:image/png;base64,aGk="),
        ]);
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json[0]["type"], "text");
        assert_eq!(json[0]["text"], "look at this");
        assert_eq!(json[1]["type"], "image_url");
        assert_eq!(json[1]["image_url"]["url"], "data:image/png;base64,aGk=");
        assert_eq!(json[1]["image_url"]["detail"], "high");
    }

    #[test]
    fn lone_text_part_collapses_to_plain_string() {
        let content = MessageContent::from_parts(vec![ContentPart::text("just text")]);
        assert_eq!(content, MessageContent::PlainText("just text".into()));
    }

    #[test]
    fn lone_image_part_stays_a_list() {
        let content = MessageContent::from_parts(vec![ContentPart::image("data:x")]);
        assert!(matches!(&content, MessageContent::Parts(p) if p.len() == 1));
    }

    #[test]
    fn plain_string_round_trips_through_serde() {
        let content = MessageContent::PlainText("round trip".into());
        let json = serde_json::to_string(&content).unwrap();
        let back: MessageContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn part_list_round_trips_through_serde() {
        let content = MessageContent::Parts(vec![
            ContentPart::text("a"),
            ContentPart::image("data:image/png;base64,eA=="),
        ]);
        let json = serde_json::to_string(&content).unwrap();
        let back: MessageContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn has_image_sees_through_part_lists() {
        assert!(!MessageContent::PlainText("no".into()).has_image());
        assert!(!MessageContent::Parts(vec![ContentPart::text("no")]).has_image());
        assert!(MessageContent::Parts(vec![
            ContentPart::text("yes"),
            ContentPart::image("data:x"),
        ])
        .has_image());
    }

    #[test]
    fn text_content_joins_text_parts_only() {
        let content = MessageContent::Parts(vec![
            ContentPart::text("first"),
            ContentPart::image("data:x"),
            ContentPart::text("second"),
        ]);
        assert_eq!(content.text_content(), "first\n\nsecond");
    }
}
