//! System clipboard reader built on arboard.
//!
//! arboard gives native clipboard access on every desktop platform — text and
//! raw RGBA image data — without a windowing toolkit in the loop.

use super::{ClipboardSnapshot, ImageAsset};

/// Read the current clipboard and classify it.
///
/// A missing or undecodable image never blocks text-only use: the image is
/// dropped with a warning and the classification downgrades accordingly.
/// No side effects beyond the read.
pub fn capture() -> ClipboardSnapshot {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[CLIPBOARD] Clipboard unavailable: {}", e);
            return ClipboardSnapshot::Empty;
        }
    };

    let text = clipboard.get_text().ok();

    let mut images = Vec::new();
    match clipboard.get_image() {
        Ok(raw) => {
            let (width, height) = (raw.width as u32, raw.height as u32);
            match ImageAsset::from_rgba(width, height, raw.bytes.into_owned()) {
                Some(asset) => images.push(asset),
                None => log::warn!(
                    "[CLIPBOARD] Dropping undecodable clipboard image ({}x{})",
                    width,
                    height
                ),
            }
        }
        Err(arboard::Error::ContentNotAvailable) => {}
        Err(e) => log::warn!("[CLIPBOARD] Image read failed: {}", e),
    }

    let snapshot = ClipboardSnapshot::classify(text, images);
    log::info!("[CLIPBOARD] Captured {} snapshot", snapshot.kind());
    snapshot
}
