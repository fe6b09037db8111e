//! Use-case driver — one-shot hotkey actions, regeneration, and the
//! expand-to-chat transition.
//!
//! The orchestrator is the only place that checks preconditions (credential,
//! non-empty clipboard) and the only place that turns failures into
//! notifications. Below it, everything returns plain `Result`s.

use crate::clipboard::ClipboardSnapshot;
use crate::compose;
use crate::error::Error;
use crate::hotkeys::HotKeyAction;
use crate::llm::client::CompletionApi;
use crate::llm::selector;
use crate::llm::types::{ChatMessage, MessageContent};
use crate::notify::Notify;
use crate::session::ConversationSession;
use crate::settings::Preferences;

pub struct Orchestrator<C: CompletionApi, N: Notify> {
    prefs: Preferences,
    client: C,
    notifier: N,
}

impl<C: CompletionApi, N: Notify> Orchestrator<C, N> {
    pub fn new(prefs: Preferences, client: C, notifier: N) -> Self {
        Self {
            prefs,
            client,
            notifier,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Swap in fresh preferences (the settings collaborator reloaded them).
    pub fn set_preferences(&mut self, prefs: Preferences) {
        self.prefs = prefs;
    }

    /// Run a hotkey action once against the snapshot.
    ///
    /// The single-turn transcript is throwaway — no session is created. The
    /// caller keeps the returned text for copying, regenerating, or expanding
    /// into a chat.
    pub async fn run_hotkey_once(
        &self,
        action: &HotKeyAction,
        snapshot: &ClipboardSnapshot,
    ) -> Result<String, Error> {
        self.one_shot(action, snapshot, "Generating response").await
    }

    /// Replace a previous one-shot result. Same path as
    /// [`Self::run_hotkey_once`]; parameters are re-resolved from current
    /// preferences rather than reused, so preference changes made since the
    /// first run take effect.
    pub async fn regenerate(
        &self,
        action: &HotKeyAction,
        snapshot: &ClipboardSnapshot,
    ) -> Result<String, Error> {
        self.one_shot(action, snapshot, "Regenerating response").await
    }

    async fn one_shot(
        &self,
        action: &HotKeyAction,
        snapshot: &ClipboardSnapshot,
        progress_label: &str,
    ) -> Result<String, Error> {
        if !self.prefs.has_credential() {
            self.notifier.failure("No API key configured");
            return Err(Error::MissingApiKey);
        }
        if snapshot.is_empty() {
            self.notifier.failure("Clipboard is empty");
            return Err(Error::EmptyClipboard);
        }

        let content = compose::compose(&action.prompt_template, snapshot);
        let transcript = vec![ChatMessage::user(content)];
        let params = selector::resolve(&transcript, &self.prefs, &self.notifier);

        log::info!("[ACTION] {} ({})", action.title, action.id);
        self.notifier.progress(progress_label);

        match self.client.complete(&transcript, &params).await {
            Ok(text) => {
                self.notifier.success("Response ready");
                Ok(text)
            }
            Err(e) => {
                self.notifier.failure(&e.to_string());
                Err(e)
            }
        }
    }

    /// Turn a completed one-shot exchange into a live conversation.
    ///
    /// The original user turn and the prior result become the first two
    /// turns verbatim — composition is deterministic, so the user turn is
    /// bit-identical to the one-shot's, and no remote call happens here. The
    /// returned session is ready for further `send_turn`s.
    pub fn expand_to_chat(
        &self,
        action: &HotKeyAction,
        snapshot: &ClipboardSnapshot,
        prior_result: &str,
    ) -> ConversationSession {
        let content = compose::compose(&action.prompt_template, snapshot);
        log::info!("[ACTION] Expanding {} result into chat", action.id);
        ConversationSession::from_exchange(content, prior_result)
    }

    /// Open a conversation straight from the clipboard, with no hotkey
    /// template, and request the first reply.
    ///
    /// A transport failure is notified and left pending in the returned
    /// session — call [`Self::send_pending`] to retry. Only precondition
    /// failures prevent the session from being created at all.
    pub async fn start_chat(
        &self,
        snapshot: &ClipboardSnapshot,
    ) -> Result<ConversationSession, Error> {
        if !self.prefs.has_credential() {
            self.notifier.failure("No API key configured");
            return Err(Error::MissingApiKey);
        }
        if snapshot.is_empty() {
            self.notifier.failure("Clipboard is empty");
            return Err(Error::EmptyClipboard);
        }

        let mut session = ConversationSession::start(compose::compose("", snapshot));
        self.notifier.progress("Starting chat");
        match session
            .send_pending(&self.prefs, &self.client, &self.notifier)
            .await
        {
            Ok(_) => self.notifier.success("Response ready"),
            Err(e) => self.notifier.failure(&e.to_string()),
        }
        Ok(session)
    }

    /// Continue a conversation owned by the caller.
    pub async fn send_turn(
        &self,
        session: &mut ConversationSession,
        content: MessageContent,
    ) -> Result<String, Error> {
        let result = session
            .send_turn(content, &self.prefs, &self.client, &self.notifier)
            .await;
        if let Err(e) = &result {
            self.notifier.failure(&e.to_string());
        }
        result
    }

    /// Retry the pending turn of a conversation after a failure.
    pub async fn send_pending(
        &self,
        session: &mut ConversationSession,
    ) -> Result<String, Error> {
        session
            .send_pending(&self.prefs, &self.client, &self.notifier)
            .await
    }
}
