//! Message composition — template text + clipboard snapshot → multimodal
//! content.
//!
//! This is the normalization core: template text always precedes clipboard
//! text and the two are concatenated, never one replacing the other; images
//! keep their clipboard order.

use crate::clipboard::ClipboardSnapshot;
use crate::llm::types::{ContentPart, MessageContent};

/// Merge a hotkey prompt template with a clipboard snapshot into message
/// content.
///
/// The trimmed template comes first. Clipboard text is appended to it
/// separated by a blank line, or becomes its own text part when there is no
/// template. Images follow in clipboard order as high-detail `image_url`
/// parts. A result that is a single text part collapses to the plain-string
/// form.
///
/// Empty template plus empty snapshot yields the empty string — callers are
/// responsible for rejecting empty input before any remote call.
pub fn compose(prompt_template: &str, snapshot: &ClipboardSnapshot) -> MessageContent {
    let mut parts: Vec<ContentPart> = Vec::new();

    let template = prompt_template.trim();
    if !template.is_empty() {
        parts.push(ContentPart::text(template));
    }

    if let Some(body) = snapshot.text() {
        let merged = match parts.last_mut() {
            Some(ContentPart::Text { text }) => {
                text.push_str("\n\n");
                text.push_str(body);
                true
            }
            _ => false,
        };
        if !merged {
            parts.push(ContentPart::text(body));
        }
    }

    for image in snapshot.images() {
        parts.push(ContentPart::image(image.data_uri()));
    }

    MessageContent::from_parts(parts)
}
