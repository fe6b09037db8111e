//! Clipboard domain — snapshot capture and classification.
//!
//! This module owns all clipboard access. External code should only use the
//! types and functions exported here.

mod reader;
mod snapshot;

pub use reader::capture;
pub use snapshot::{ClipboardSnapshot, ImageAsset};
