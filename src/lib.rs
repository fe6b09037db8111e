//! Clipchat — clipboard-to-chat core library.
//!
//! Turns whatever is on the system clipboard (text, an image, or both) into a
//! request to a chat-completions API: either a one-shot templated hotkey
//! action, or a full multi-turn conversation. Results come back as plain text
//! for the embedding shell to present, copy, regenerate, or expand into chat.
//!
//! This crate is the orchestration core only. List/menu rendering, settings
//! screens and toast presentation belong to the embedding shell, which talks
//! to the core through [`notify::Notify`] and the types exported here.
//!
//! Domains:
//!   - clipboard/      — snapshot capture + classification
//!   - compose.rs      — template + snapshot → multimodal message content
//!   - llm/            — wire types, model selection, completion client
//!   - session.rs      — conversation transcript ownership
//!   - orchestrator.rs — hotkey / regenerate / expand-to-chat use cases
//!   - hotkeys.rs      — built-in action set + user overrides
//!   - settings.rs     — preferences from env / OS keychain

pub mod clipboard;
pub mod compose;
pub mod error;
pub mod hotkeys;
pub mod llm;
pub mod notify;
pub mod orchestrator;
pub mod session;
pub mod settings;

pub use error::Error;
pub use orchestrator::Orchestrator;
pub use session::ConversationSession;

/// One-time process setup: load `.env.local` → `.env` from the working
/// directory, then initialize logging. Embedders that manage their own
/// environment can skip this and call [`settings::Preferences::load`] directly.
pub fn init() {
    for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break;
        }
    }

    let _ = env_logger::try_init();
}
