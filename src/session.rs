//! Conversation session — owns one append-only transcript.

use crate::error::Error;
use crate::llm::client::CompletionApi;
use crate::llm::selector;
use crate::llm::types::{ChatMessage, MessageContent, Role};
use crate::notify::Notify;
use crate::settings::Preferences;

/// One conversation's ordered transcript plus the only operations that may
/// grow it.
///
/// The transcript always starts with a user turn and alternates roles
/// strictly; both facts are upheld by this API rather than checked by
/// consumers. `&mut self` on the sending calls means two network requests for
/// the same session can never be in flight together.
///
/// A session has no terminal state — it ends when its owner drops it, and
/// nothing is persisted across process restarts.
pub struct ConversationSession {
    transcript: Vec<ChatMessage>,
}

impl ConversationSession {
    /// Open a session with its first user turn. The turn is pending until
    /// [`Self::send_pending`] fetches the first reply.
    pub fn start(first_user_content: MessageContent) -> Self {
        Self {
            transcript: vec![ChatMessage::user(first_user_content)],
        }
    }

    /// Open a session that already holds a completed first exchange. Used to
    /// expand a one-shot hotkey result into a conversation without
    /// recomputing the original exchange.
    pub(crate) fn from_exchange(user_content: MessageContent, assistant_text: &str) -> Self {
        Self {
            transcript: vec![
                ChatMessage::user(user_content),
                ChatMessage::assistant(assistant_text),
            ],
        }
    }

    /// Append a user turn, request a completion for the whole transcript, and
    /// append the assistant reply.
    ///
    /// On failure the user turn stays in the transcript — the attempt is part
    /// of history — and no assistant turn is appended; retry with
    /// [`Self::send_pending`], never by re-sending the same content. While a
    /// turn is pending, further `send_turn` calls are rejected with
    /// [`Error::TurnPending`] so the transcript can never hold two
    /// consecutive user messages.
    pub async fn send_turn<C: CompletionApi>(
        &mut self,
        user_content: MessageContent,
        prefs: &Preferences,
        client: &C,
        notifier: &dyn Notify,
    ) -> Result<String, Error> {
        if self.last_role() == Some(Role::User) {
            return Err(Error::TurnPending);
        }
        self.transcript.push(ChatMessage::user(user_content));
        self.request_completion(prefs, client, notifier).await
    }

    /// Send the transcript as it stands. Covers both the first turn after
    /// [`Self::start`] and an explicit retry after a failed turn. Rejected
    /// when the last turn already has a reply.
    pub async fn send_pending<C: CompletionApi>(
        &mut self,
        prefs: &Preferences,
        client: &C,
        notifier: &dyn Notify,
    ) -> Result<String, Error> {
        if self.last_role() != Some(Role::User) {
            return Err(Error::NoPendingTurn);
        }
        self.request_completion(prefs, client, notifier).await
    }

    async fn request_completion<C: CompletionApi>(
        &mut self,
        prefs: &Preferences,
        client: &C,
        notifier: &dyn Notify,
    ) -> Result<String, Error> {
        // Parameters are resolved fresh each turn; image content in the
        // transcript can change what model and token limit apply.
        let params = selector::resolve(&self.transcript, prefs, notifier);
        match client.complete(&self.transcript, &params).await {
            Ok(text) => {
                self.transcript.push(ChatMessage::assistant(&text));
                log::info!(
                    "[SESSION] Turn complete ({} messages)",
                    self.transcript.len()
                );
                Ok(text)
            }
            Err(e) => {
                log::error!("[SESSION] Turn failed: {}", e);
                Err(e)
            }
        }
    }

    fn last_role(&self) -> Option<Role> {
        self.transcript.last().map(|m| m.role)
    }

    /// Latest assistant reply, if any turn has completed.
    pub fn last_assistant_text(&self) -> Option<&str> {
        self.transcript.iter().rev().find_map(|m| {
            if m.role == Role::Assistant {
                match &m.content {
                    MessageContent::PlainText(s) => Some(s.as_str()),
                    MessageContent::Parts(_) => None,
                }
            } else {
                None
            }
        })
    }

    /// Latest user turn's content.
    pub fn last_user_content(&self) -> Option<&MessageContent> {
        self.transcript
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| &m.content)
    }

    /// The full ordered transcript. Read-only; turns are immutable once
    /// appended.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::types::ModelParameters;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct CannedClient {
        replies: Mutex<VecDeque<Result<String, Error>>>,
    }

    impl CannedClient {
        fn new(replies: Vec<Result<String, Error>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
            }
        }
    }

    impl CompletionApi for CannedClient {
        async fn complete(
            &self,
            _transcript: &[ChatMessage],
            _params: &ModelParameters,
        ) -> Result<String, Error> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(Error::InvalidResponse))
        }
    }

    struct NullNotifier;

    impl Notify for NullNotifier {
        fn progress(&self, _message: &str) {}
        fn success(&self, _message: &str) {}
        fn failure(&self, _message: &str) {}
        fn model_switched(&self, _model: &str) {}
    }

    fn prefs() -> Preferences {
        Preferences {
            api_key: "sk-test".into(),
            model: "gpt-4o-mini".into(),
            temperature: 0.7,
            max_tokens: 2048,
            actions: Vec::new(),
        }
    }

    fn assert_alternating(transcript: &[ChatMessage]) {
        assert!(!transcript.is_empty());
        assert_eq!(transcript[0].role, Role::User);
        for pair in transcript.windows(2) {
            assert_ne!(pair[0].role, pair[1].role, "two consecutive {:?}", pair[0].role);
        }
    }

    #[tokio::test]
    async fn first_turn_appends_user_then_assistant() {
        let client = CannedClient::new(vec![Ok("hi there".into())]);
        let mut session = ConversationSession::start(MessageContent::PlainText("hello".into()));

        let reply = session
            .send_pending(&prefs(), &client, &NullNotifier)
            .await
            .unwrap();

        assert_eq!(reply, "hi there");
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.last_assistant_text(), Some("hi there"));
        assert_alternating(session.transcript());
    }

    #[tokio::test]
    async fn failed_turn_keeps_user_message_and_no_assistant() {
        let client = CannedClient::new(vec![Err(Error::Transport {
            message: "boom".into(),
        })]);
        let mut session = ConversationSession::from_exchange(
            MessageContent::PlainText("q1".into()),
            "a1",
        );

        let result = session
            .send_turn(
                MessageContent::PlainText("q2".into()),
                &prefs(),
                &client,
                &NullNotifier,
            )
            .await;

        assert!(matches!(result, Err(Error::Transport { .. })));
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript().last().unwrap().role, Role::User);
        assert_eq!(session.last_assistant_text(), Some("a1"));
        assert_alternating(session.transcript());
    }

    #[tokio::test]
    async fn send_turn_while_pending_is_rejected() {
        let client = CannedClient::new(vec![
            Err(Error::Transport { message: "down".into() }),
            Ok("recovered".into()),
        ]);
        let mut session = ConversationSession::start(MessageContent::PlainText("q1".into()));

        let _ = session.send_pending(&prefs(), &client, &NullNotifier).await;
        let second = session
            .send_turn(
                MessageContent::PlainText("q2".into()),
                &prefs(),
                &client,
                &NullNotifier,
            )
            .await;
        assert!(matches!(second, Err(Error::TurnPending)));

        // The explicit retry path resolves the pending turn.
        let retried = session
            .send_pending(&prefs(), &client, &NullNotifier)
            .await
            .unwrap();
        assert_eq!(retried, "recovered");
        assert_alternating(session.transcript());
    }

    #[tokio::test]
    async fn send_pending_with_nothing_pending_is_rejected() {
        let client = CannedClient::new(vec![]);
        let mut session = ConversationSession::from_exchange(
            MessageContent::PlainText("q1".into()),
            "a1",
        );

        let result = session.send_pending(&prefs(), &client, &NullNotifier).await;
        assert!(matches!(result, Err(Error::NoPendingTurn)));
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn multi_turn_history_grows_in_order() {
        let client = CannedClient::new(vec![Ok("a1".into()), Ok("a2".into())]);
        let mut session = ConversationSession::start(MessageContent::PlainText("q1".into()));

        session.send_pending(&prefs(), &client, &NullNotifier).await.unwrap();
        session
            .send_turn(
                MessageContent::PlainText("q2".into()),
                &prefs(),
                &client,
                &NullNotifier,
            )
            .await
            .unwrap();

        let texts: Vec<_> = session
            .transcript()
            .iter()
            .map(|m| m.content.text_content())
            .collect();
        assert_eq!(texts, vec!["q1", "a1", "q2", "a2"]);
        assert_eq!(
            session.last_user_content(),
            Some(&MessageContent::PlainText("q2".into()))
        );
        assert_alternating(session.transcript());
    }
}
