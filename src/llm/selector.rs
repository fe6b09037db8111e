//! Model selection — vision auto-switch and output-token clamping.

use crate::llm::types::{ChatMessage, ModelParameters};
use crate::notify::Notify;
use crate::settings::Preferences;

/// Models that accept image content parts in their input.
pub const VISION_MODELS: &[&str] = &[
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4-turbo",
    "gpt-4.1",
    "gpt-4.1-mini",
];

/// Fallback when the configured model can't take images.
pub const VISION_FALLBACK_MODEL: &str = "gpt-4o";

/// Conservative output ceiling for vision requests.
pub const VISION_MAX_TOKENS: u32 = 4096;

pub fn is_vision_capable(model: &str) -> bool {
    VISION_MODELS.contains(&model)
}

/// Resolve effective parameters for the given transcript.
///
/// If any message carries an image part and the configured model is not
/// vision-capable, the model is overridden to [`VISION_FALLBACK_MODEL`] and
/// the switch is announced through the notifier. With images present,
/// `max_tokens` is clamped to `min(configured, 4096)`. Temperature passes
/// through untouched.
///
/// Recomputed on every request: the transcript can gain or lose image content
/// between turns, and preferences may change under us.
pub fn resolve(
    transcript: &[ChatMessage],
    prefs: &Preferences,
    notifier: &dyn Notify,
) -> ModelParameters {
    let has_images = transcript.iter().any(|m| m.content.has_image());

    let mut model = prefs.model.clone();
    let mut max_tokens = prefs.max_tokens;

    if has_images {
        if !is_vision_capable(&model) {
            log::info!(
                "[LLM] {} can't take images, switching to {}",
                model,
                VISION_FALLBACK_MODEL
            );
            notifier.model_switched(VISION_FALLBACK_MODEL);
            model = VISION_FALLBACK_MODEL.to_string();
        }
        max_tokens = max_tokens.min(VISION_MAX_TOKENS);
    }

    ModelParameters {
        model,
        max_tokens,
        temperature: prefs.temperature,
    }
}
