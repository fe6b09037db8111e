//! LLM domain — wire types, model selection, completion client.
//!
//! Public API for everything that touches the chat-completions provider.
//! External code should only use the items exported here.

pub mod client;
pub mod selector;
pub mod types;

pub use client::{ChatClient, CompletionApi};
pub use types::{ChatMessage, ContentPart, MessageContent, ModelParameters, Role};
