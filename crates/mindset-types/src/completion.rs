//! Completion endpoint request/response types.
//!
//! These model the JSON contract with the remote professor service. Every
//! endpoint takes a POST with a JSON body and answers with a `response`
//! text field; extra fields in the reply are optional.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::chat::Message;
use crate::session::SessionId;
use crate::wizard::WizardStep;

/// Path of the freeform chat endpoint.
pub const CHAT_ENDPOINT: &str = "/chat";

/// Who carries the conversation history for wizard steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// The server remembers prior steps keyed by session id; step bodies
    /// carry only the step field and `session_id`.
    #[default]
    Server,
    /// Step bodies additionally carry `conversation_history`.
    Client,
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryMode::Server => write!(f, "server"),
            HistoryMode::Client => write!(f, "client"),
        }
    }
}

impl FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "server" => Ok(HistoryMode::Server),
            "client" => Ok(HistoryMode::Client),
            other => Err(format!("invalid history mode: '{other}'")),
        }
    }
}

/// A request to the completion endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionRequest {
    /// Freeform chat turn; the client always carries the full history.
    Chat {
        message: String,
        session_id: SessionId,
        conversation_history: Vec<Message>,
    },
    /// One wizard step.
    Step {
        step: WizardStep,
        text: String,
        session_id: SessionId,
        /// Present only in [`HistoryMode::Client`].
        conversation_history: Option<Vec<Message>>,
    },
}

impl CompletionRequest {
    /// Endpoint path this request is posted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            CompletionRequest::Chat { .. } => CHAT_ENDPOINT,
            CompletionRequest::Step { step, .. } => step.endpoint(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        match self {
            CompletionRequest::Chat { session_id, .. } | CompletionRequest::Step { session_id, .. } => {
                session_id
            }
        }
    }

    /// The student's text carried by this request.
    pub fn text(&self) -> &str {
        match self {
            CompletionRequest::Chat { message, .. } => message,
            CompletionRequest::Step { text, .. } => text,
        }
    }

    /// JSON body sent on the wire.
    pub fn body(&self) -> serde_json::Value {
        match self {
            CompletionRequest::Chat {
                message,
                session_id,
                conversation_history,
            } => serde_json::json!({
                "message": message,
                "session_id": session_id,
                "conversation_history": conversation_history,
            }),
            CompletionRequest::Step {
                step,
                text,
                session_id,
                conversation_history,
            } => {
                let mut body = serde_json::Map::new();
                body.insert(step.payload_field().to_string(), serde_json::Value::from(text.as_str()));
                body.insert(
                    "session_id".to_string(),
                    serde_json::Value::from(session_id.as_str()),
                );
                if let Some(history) = conversation_history {
                    body.insert(
                        "conversation_history".to_string(),
                        serde_json::to_value(history).unwrap_or_default(),
                    );
                }
                serde_json::Value::Object(body)
            }
        }
    }
}

/// Reply from any completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text.
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Server-side step tag (e.g. `challenge_analysis`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Only sent by `/finalize_session`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_summary: Option<SessionSummary>,
}

impl CompletionResponse {
    /// A bare response carrying only text.
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            session_id: None,
            step: None,
            timestamp: None,
            session_summary: None,
        }
    }
}

/// Closing statistics returned when a wizard session is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_exchanges: u32,
    #[serde(default)]
    pub completed_steps: Vec<String>,
}
