//! Snapshot value types — one immutable read of the clipboard.

use base64::Engine;

/// One decoded clipboard image, ready to embed in a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub bytes_base64: String,
    pub mime_type: String,
}

impl ImageAsset {
    /// Encode raw RGBA pixels to an in-memory PNG and base64 it.
    ///
    /// Returns `None` when the pixel buffer is inconsistent with the stated
    /// dimensions or PNG encoding fails. Callers drop the image rather than
    /// failing the whole capture — a corrupted image must never block
    /// text-only use.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let img = image::RgbaImage::from_raw(width, height, rgba)?;
        let mut png_bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut png_bytes),
                image::ImageFormat::Png,
            )
            .ok()?;
        if png_bytes.is_empty() {
            return None;
        }
        Some(Self {
            bytes_base64: base64::engine::general_purpose::STANDARD.encode(&png_bytes),
            mime_type: "image/png".to_string(),
        })
    }

    /// `data:<mime>;base64,<payload>` — the form chat-completions image parts
    /// expect.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.bytes_base64)
    }
}

/// One immutable read of the system clipboard, classified by what it held.
///
/// `Text`/`Mixed` never carry a body that is empty after trimming, and
/// `Image`/`Mixed` never carry an empty image list — [`Self::classify`] is
/// the only constructor and upholds both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardSnapshot {
    Empty,
    Text { body: String },
    Image { images: Vec<ImageAsset> },
    Mixed { body: String, images: Vec<ImageAsset> },
}

impl ClipboardSnapshot {
    /// Classify raw capture results into a snapshot.
    ///
    /// Text is trimmed; whitespace-only text counts as absent. Undecodable
    /// images were already dropped by the reader, so an empty image list here
    /// simply means "no image" — that is how `mixed` downgrades to `text`
    /// and `image` downgrades to `empty`.
    pub fn classify(text: Option<String>, images: Vec<ImageAsset>) -> Self {
        let body = text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        match (body, images.is_empty()) {
            (Some(body), false) => Self::Mixed { body, images },
            (Some(body), true) => Self::Text { body },
            (None, false) => Self::Image { images },
            (None, true) => Self::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Clipboard text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { body } | Self::Mixed { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Clipboard images in original order; empty when there are none.
    pub fn images(&self) -> &[ImageAsset] {
        match self {
            Self::Image { images } | Self::Mixed { images, .. } => images,
            _ => &[],
        }
    }

    /// Short tag for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Text { .. } => "text",
            Self::Image { .. } => "image",
            Self::Mixed { .. } => "mixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> ImageAsset {
        ImageAsset {
            bytes_base64: "aGk=".to_string(),
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn text_and_image_is_mixed() {
        let snap = ClipboardSnapshot::classify(Some("hello".into()), vec![asset()]);
        assert_eq!(snap.kind(), "mixed");
        assert_eq!(snap.text(), Some("hello"));
        assert_eq!(snap.images().len(), 1);
    }

    #[test]
    fn text_only_is_text() {
        let snap = ClipboardSnapshot::classify(Some("hello".into()), vec![]);
        assert_eq!(snap.kind(), "text");
    }

    #[test]
    fn image_only_is_image() {
        let snap = ClipboardSnapshot::classify(None, vec![asset()]);
        assert_eq!(snap.kind(), "image");
        assert!(snap.text().is_none());
    }

    #[test]
    fn nothing_is_empty() {
        assert!(ClipboardSnapshot::classify(None, vec![]).is_empty());
    }

    #[test]
    fn whitespace_text_counts_as_absent() {
        assert!(ClipboardSnapshot::classify(Some("   \n\t ".into()), vec![]).is_empty());
        let snap = ClipboardSnapshot::classify(Some("  \n ".into()), vec![asset()]);
        assert_eq!(snap.kind(), "image");
    }

    #[test]
    fn text_is_trimmed() {
        let snap = ClipboardSnapshot::classify(Some("  hello \n".into()), vec![]);
        assert_eq!(snap.text(), Some("hello"));
    }

    #[test]
    fn dropped_image_downgrades_mixed_to_text() {
        // The reader passes an empty image list when decoding failed.
        let snap = ClipboardSnapshot::classify(Some("hello".into()), vec![]);
        assert_eq!(snap.kind(), "text");
    }

    #[test]
    fn bad_pixel_buffer_is_rejected() {
        // 2x2 RGBA needs 16 bytes; give it 3.
        assert!(ImageAsset::from_rgba(2, 2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn valid_pixels_encode_to_png_data_uri() {
        let asset = ImageAsset::from_rgba(1, 1, vec![255, 0, 0, 255]).expect("1x1 should encode");
        assert_eq!(asset.mime_type, "image/png");
        assert!(!asset.bytes_base64.is_empty());
        assert!(asset.data_uri().starts_with("data:image/png;base64,"));
    }
}
