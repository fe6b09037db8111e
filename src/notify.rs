//! Presentation boundary — events the core pushes toward the UI shell.
//!
//! The core never renders anything itself. Toasts, HUDs and status bars hook
//! in by implementing [`Notify`]; [`LogNotifier`] is the headless default.

/// Sink for user-facing notifications emitted during orchestration.
pub trait Notify {
    /// A request is in flight.
    fn progress(&self, message: &str);
    /// A result is ready.
    fn success(&self, message: &str);
    /// An action failed; `message` is user-presentable.
    fn failure(&self, message: &str);
    /// The configured model was auto-switched to a vision-capable one.
    fn model_switched(&self, model: &str);
}

/// Notifier that only writes to the log. Useful for tests, CLIs and any
/// embedder that surfaces outcomes through return values alone.
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn progress(&self, message: &str) {
        log::info!("[NOTIFY] {}", message);
    }

    fn success(&self, message: &str) {
        log::info!("[NOTIFY] {}", message);
    }

    fn failure(&self, message: &str) {
        log::error!("[NOTIFY] {}", message);
    }

    fn model_switched(&self, model: &str) {
        log::info!("[NOTIFY] Switched to {} for image support", model);
    }
}
