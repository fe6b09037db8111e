//! Preferences — the configuration surface the core consumes.
//!
//! Values come from process env vars (seeded from `.env.local` / `.env` by
//! [`crate::init`]), with the API key also looked up in the OS keychain. All
//! parsing failures fall back to defaults and are logged, never thrown — a
//! typo in a numeric preference must not break the app.

use crate::hotkeys::{self, HotKeyAction};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

const KEYRING_SERVICE: &str = "clipchat";
const KEYRING_USER: &str = "openai";

/// User-configured preferences, resolved once per load. The orchestrator
/// holds a copy; reload and swap it to pick up changes.
#[derive(Debug, Clone)]
pub struct Preferences {
    /// Bearer credential for the provider. Empty means not configured.
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Hotkey set: user override or the built-in six.
    pub actions: Vec<HotKeyAction>,
}

impl Preferences {
    /// Load from the environment. Missing or malformed values fall back to
    /// defaults; only the API key has no default.
    pub fn load() -> Self {
        let api_key = load_api_key().unwrap_or_default();
        let model = std::env::var("CLIPCHAT_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = parse_or_default(
            "CLIPCHAT_TEMPERATURE",
            std::env::var("CLIPCHAT_TEMPERATURE").ok(),
            DEFAULT_TEMPERATURE,
        );
        let max_tokens = parse_or_default(
            "CLIPCHAT_MAX_TOKENS",
            std::env::var("CLIPCHAT_MAX_TOKENS").ok(),
            DEFAULT_MAX_TOKENS,
        );
        let actions = hotkeys::load_actions(std::env::var("CLIPCHAT_ACTIONS").ok().as_deref());

        log::info!(
            "[SETTINGS] model={}, temperature={}, max_tokens={}, {} actions, key configured: {}",
            model,
            temperature,
            max_tokens,
            actions.len(),
            !api_key.is_empty()
        );

        Self {
            api_key,
            model,
            temperature,
            max_tokens,
            actions,
        }
    }

    /// Precondition for any action: is there a credential to send?
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Find the API key: env var first, then the OS keychain. A keychain hit is
/// loaded into env so later lookups in this process are cheap.
fn load_api_key() -> Option<String> {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Some(key);
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                std::env::set_var("OPENAI_API_KEY", &key);
                log::info!("[SETTINGS] Loaded API key from OS keychain");
                return Some(key);
            }
        }
    }

    None
}

/// Persist the API key to the OS keychain and the current process env.
pub fn save_api_key(api_key: &str) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;
    std::env::set_var("OPENAI_API_KEY", api_key);
    log::info!("[SETTINGS] API key saved");
    Ok(())
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match raw {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!(
                    "[SETTINGS] Invalid {} {:?}, using default {}",
                    name,
                    raw,
                    default
                );
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_parse() {
        assert_eq!(parse_or_default("T", Some("0.3".into()), 0.7_f32), 0.3);
        assert_eq!(parse_or_default("M", Some("4096".into()), 2048_u32), 4096);
        assert_eq!(parse_or_default("M", Some(" 512 ".into()), 2048_u32), 512);
    }

    #[test]
    fn malformed_numeric_strings_fall_back() {
        assert_eq!(parse_or_default("T", Some("warm".into()), 0.7_f32), 0.7);
        assert_eq!(parse_or_default("M", Some("-5".into()), 2048_u32), 2048);
        assert_eq!(parse_or_default("M", None, 2048_u32), 2048);
    }

    #[test]
    fn credential_check_ignores_whitespace() {
        let mut prefs = Preferences {
            api_key: "  ".into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            actions: Vec::new(),
        };
        assert!(!prefs.has_credential());
        prefs.api_key = "sk-live".into();
        assert!(prefs.has_credential());
    }
}
