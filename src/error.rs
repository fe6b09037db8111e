//! Crate error taxonomy.
//!
//! Every failure surfaces as a value at the orchestrator/session boundary;
//! nothing here is fatal to the process. Clipboard image decode failures are
//! deliberately absent — they are recovered inside the clipboard domain and
//! never reach callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No API credential configured. Checked before any network attempt.
    #[error("No API key configured. Add your OpenAI API key in Settings.")]
    MissingApiKey,

    /// The clipboard held nothing usable when an action required content.
    #[error("Clipboard is empty. Copy some text or an image first.")]
    EmptyClipboard,

    /// Network-level failure or non-success HTTP status from the provider.
    /// The message is parsed from the provider error body when possible.
    #[error("{message}")]
    Transport { message: String },

    /// Success status but the response body lacks the expected fields.
    #[error("Provider returned an unexpected response shape")]
    InvalidResponse,

    /// A previous turn in this session is still unanswered; retry it with
    /// `send_pending` instead of appending a new user turn.
    #[error("Previous turn is still unanswered. Retry it before sending a new one.")]
    TurnPending,

    /// Nothing to send: the last turn already has an assistant reply.
    #[error("No pending turn to send")]
    NoPendingTurn,
}
