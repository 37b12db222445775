//! Response types for the service's housekeeping routes.
//!
//! `GET /health`, `GET /get_session_history` and `POST /reset_session`.

use serde::{Deserialize, Serialize};

use crate::chat::MessageRole;

/// Reply from `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    /// Whether the service has credentials for its language model.
    #[serde(default)]
    pub anthropic_configured: bool,
    #[serde(default)]
    pub active_sessions: Option<u32>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// One turn stored server-side for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Reply from `GET /get_session_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHistory {
    pub session_id: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub message_count: u32,
}

/// Reply from `POST /reset_session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetAck {
    pub message: String,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_tolerates_missing_fields() {
        let status: HealthStatus = serde_json::from_str(r#"{"status":"healthy"}"#).unwrap();
        assert!(status.is_healthy());
        assert!(!status.anthropic_configured);
        assert!(status.active_sessions.is_none());
    }

    #[test]
    fn test_session_history_parses_entries() {
        let history: SessionHistory = serde_json::from_str(
            r#"{
                "session_id": "default",
                "history": [
                    {"role": "user", "content": "Challenge: Missed a deadline", "timestamp": "t1"},
                    {"role": "assistant", "content": "Let's unpack that."}
                ],
                "message_count": 2
            }"#,
        )
        .unwrap();
        assert_eq!(history.history.len(), 2);
        assert_eq!(history.history[0].role, MessageRole::User);
        assert!(history.history[1].timestamp.is_none());
    }
}
