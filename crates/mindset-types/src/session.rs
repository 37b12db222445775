//! Session identifier types.
//!
//! A `SessionId` is an opaque token the completion endpoint uses to
//! correlate requests from one client session. It only needs to be unique
//! enough to tell concurrent users apart server-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Opaque session identifier sent with every completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// The literal token shared by every session using [`SessionIdStrategy::Fixed`].
    pub const FIXED: &'static str = "default";

    /// Wrap an existing identifier (e.g. one passed on the command line).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Timestamp-derived identifier: `session_<unix millis>`.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(format!("session_{}", at.timestamp_millis()))
    }

    /// The fixed `default` identifier.
    ///
    /// Concurrent sessions using it are indistinguishable to the server.
    pub fn fixed() -> Self {
        Self(Self::FIXED.to_string())
    }

    /// Random time-sortable identifier (UUID v7).
    pub fn random() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Generate a fresh identifier using the given strategy.
    pub fn generate(strategy: SessionIdStrategy) -> Self {
        match strategy {
            SessionIdStrategy::Timestamp => Self::from_timestamp(Utc::now()),
            SessionIdStrategy::Fixed => Self::fixed(),
            SessionIdStrategy::Uuid => Self::random(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a new session picks its identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionIdStrategy {
    /// `session_<unix millis>`.
    #[default]
    Timestamp,
    /// The literal `default`.
    Fixed,
    /// UUID v7.
    Uuid,
}

impl fmt::Display for SessionIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionIdStrategy::Timestamp => write!(f, "timestamp"),
            SessionIdStrategy::Fixed => write!(f, "fixed"),
            SessionIdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

impl FromStr for SessionIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "timestamp" => Ok(SessionIdStrategy::Timestamp),
            "fixed" => Ok(SessionIdStrategy::Fixed),
            "uuid" => Ok(SessionIdStrategy::Uuid),
            other => Err(format!("invalid session id strategy: '{other}'")),
        }
    }
}
