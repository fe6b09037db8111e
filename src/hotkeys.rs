//! Built-in hotkey actions and user overrides.
//!
//! A hotkey is a named, pre-templated single-turn request. The built-in set
//! covers the common reply/summarize/rewrite flows; users can replace it
//! wholesale with a JSON array in their preferences. The templates are inert
//! configuration data — the casual-reply persona document in particular is
//! sent verbatim, never parsed.

use serde::{Deserialize, Serialize};

/// A named, pre-templated single-turn action the user can trigger directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotKeyAction {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub prompt_template: String,
    pub icon: String,
}

/// Persona/style document for the casual-reply action. Used verbatim as the
/// prompt template.
const CASUAL_REPLY_PERSONA: &str = r#"You are drafting a reply on behalf of the user. Write the way a relaxed, friendly person actually texts or emails — not the way an assistant writes.

Voice and tone:
- Warm, informal, first person. Contractions everywhere ("I'll", "that's", "can't").
- Short sentences. It's fine to start with "And" or "But".
- Light humor is welcome when the message invites it; never forced jokes.
- Match the energy of the message you're replying to. If they're brief, be brief. If they're excited, be a little excited back.

Structure:
- No greeting line unless the original message has one.
- Get to the point in the first sentence.
- One thought per paragraph; most replies should be one or two paragraphs.
- Sign-offs only when the original is an email; then keep it to something like "Cheers" or "Thanks!".

Things to avoid:
- Corporate filler: "I hope this message finds you well", "per my last", "circling back", "touching base".
- Hedging stacks: "I think maybe we could possibly...". Pick a position.
- Exclamation mark pileups. One per message is usually plenty.
- Emoji unless the original message uses them; then mirror sparingly.
- Restating their whole message back at them.

Content rules:
- Answer every question they asked, in the order they asked.
- If you need to say no, say it kindly but plainly, and offer an alternative when one exists.
- If something is unclear, ask one short follow-up question instead of guessing.
- Keep any commitments vague on exact times unless the original proposes one.

Reply to the following message. Output only the reply text, nothing else."#;

/// The six built-in actions, in menu order.
pub fn default_actions() -> Vec<HotKeyAction> {
    vec![
        HotKeyAction {
            id: "professional-reply".to_string(),
            title: "Professional Reply".to_string(),
            subtitle: "Draft a polished reply to the copied message".to_string(),
            prompt_template: "Write a professional, courteous reply to the following message. \
                              Keep it concise, address every point raised, and output only the \
                              reply text."
                .to_string(),
            icon: "briefcase".to_string(),
        },
        HotKeyAction {
            id: "casual-reply".to_string(),
            title: "Casual Reply".to_string(),
            subtitle: "Draft a friendly, informal reply".to_string(),
            prompt_template: CASUAL_REPLY_PERSONA.to_string(),
            icon: "chat".to_string(),
        },
        HotKeyAction {
            id: "email-draft".to_string(),
            title: "Email Draft".to_string(),
            subtitle: "Turn the copied notes into a complete email".to_string(),
            prompt_template: "Turn the following notes into a complete, well-structured email \
                              with a subject line. Output only the email."
                .to_string(),
            icon: "mail".to_string(),
        },
        HotKeyAction {
            id: "summarize".to_string(),
            title: "Summarize".to_string(),
            subtitle: "Condense the copied content to its key points".to_string(),
            prompt_template: "Summarize the following content in a few short bullet points. \
                              Lead with the single most important takeaway."
                .to_string(),
            icon: "list".to_string(),
        },
        HotKeyAction {
            id: "explain".to_string(),
            title: "Explain".to_string(),
            subtitle: "Explain the copied content in plain language".to_string(),
            prompt_template: "Explain the following content in plain language for someone \
                              unfamiliar with the topic. Define any jargon you keep."
                .to_string(),
            icon: "lightbulb".to_string(),
        },
        HotKeyAction {
            id: "improve-writing".to_string(),
            title: "Improve Writing".to_string(),
            subtitle: "Fix grammar and tighten the copied text".to_string(),
            prompt_template: "Rewrite the following text with correct grammar and spelling, \
                              clearer phrasing, and no change in meaning or tone. Output only \
                              the rewritten text."
                .to_string(),
            icon: "pencil".to_string(),
        },
    ]
}

/// Parse a user-supplied JSON override of the action set.
///
/// Malformed JSON is a recoverable configuration error: log it and fall back
/// to the built-in set, never fail.
pub fn load_actions(override_json: Option<&str>) -> Vec<HotKeyAction> {
    let Some(json) = override_json.filter(|j| !j.trim().is_empty()) else {
        return default_actions();
    };

    match serde_json::from_str::<Vec<HotKeyAction>>(json) {
        Ok(actions) if !actions.is_empty() => {
            log::info!("[SETTINGS] Loaded {} user-defined actions", actions.len());
            actions
        }
        Ok(_) => {
            log::warn!("[SETTINGS] Action override is an empty array, using built-ins");
            default_actions()
        }
        Err(e) => {
            log::warn!("[SETTINGS] Malformed action override ({}), using built-ins", e);
            default_actions()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_builtins_with_unique_ids() {
        let actions = default_actions();
        assert_eq!(actions.len(), 6);
        let mut ids: Vec<_> = actions.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&"casual-reply"));
        assert!(ids.contains(&"summarize"));
    }

    #[test]
    fn casual_reply_carries_the_full_persona_document() {
        let actions = default_actions();
        let casual = actions.iter().find(|a| a.id == "casual-reply").unwrap();
        assert!(casual.prompt_template.contains("Voice and tone:"));
        assert!(casual.prompt_template.len() > 1000);
    }

    #[test]
    fn no_override_uses_builtins() {
        assert_eq!(load_actions(None), default_actions());
        assert_eq!(load_actions(Some("  ")), default_actions());
    }

    #[test]
    fn valid_override_replaces_builtins() {
        let json = r#"[{
            "id": "translate",
            "title": "Translate",
            "subtitle": "Translate to English",
            "promptTemplate": "Translate this to English:",
            "icon": "language"
        }]"#;
        let actions = load_actions(Some(json));
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].id, "translate");
        assert_eq!(actions[0].prompt_template, "Translate this to English:");
    }

    #[test]
    fn malformed_override_falls_back_to_builtins() {
        assert_eq!(load_actions(Some("{not json")), default_actions());
        assert_eq!(load_actions(Some(r#"{"id":"x"}"#)), default_actions());
    }

    #[test]
    fn empty_array_override_falls_back_to_builtins() {
        assert_eq!(load_actions(Some("[]")), default_actions());
    }
}
