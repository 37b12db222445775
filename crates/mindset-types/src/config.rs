//! Client configuration types for Mindset.
//!
//! `MindsetConfig` represents the `config.toml` that selects the completion
//! service, how sessions pick their identifiers, and wizard pacing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::completion::HistoryMode;
use crate::session::SessionIdStrategy;

/// Default completion service.
pub const DEFAULT_BASE_URL: &str = "https://growth-mindset.onrender.com";

/// Top-level configuration for the Mindset client.
///
/// Loaded from `~/.mindset/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindsetConfig {
    /// Base URL of the completion service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pause between showing a step's response and activating the next step.
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,

    /// Whether wizard step requests carry the conversation history.
    #[serde(default)]
    pub wizard_history_mode: HistoryMode,

    #[serde(default = "default_chat_session_ids")]
    pub chat_session_ids: SessionIdStrategy,

    #[serde(default = "default_wizard_session_ids")]
    pub wizard_session_ids: SessionIdStrategy,

    /// Client-side request timeout. Unset means the transport default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_advance_delay_ms() -> u64 {
    1000
}

fn default_chat_session_ids() -> SessionIdStrategy {
    SessionIdStrategy::Timestamp
}

fn default_wizard_session_ids() -> SessionIdStrategy {
    SessionIdStrategy::Fixed
}

impl MindsetConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for MindsetConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            advance_delay_ms: default_advance_delay_ms(),
            wizard_history_mode: HistoryMode::default(),
            chat_session_ids: default_chat_session_ids(),
            wizard_session_ids: default_wizard_session_ids(),
            request_timeout_secs: None,
        }
    }
}
