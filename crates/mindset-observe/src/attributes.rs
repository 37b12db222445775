//! Span and event field names shared across the CLI.
//!
//! Use as constant field names: `info_span!("wizard", { SESSION_ID } = %id)`.

/// Session identifier sent with every request.
pub const SESSION_ID: &str = "session.id";

/// Session kind (`chat` or `wizard`).
pub const SESSION_KIND: &str = "session.kind";

/// 1-based wizard step number.
pub const WIZARD_STEP: &str = "wizard.step";

/// Path of the service endpoint being called (e.g. `/analyze_challenge`).
pub const HTTP_ENDPOINT: &str = "http.endpoint";

/// Base URL of the professor service.
pub const SERVICE_URL: &str = "service.url";

// --- Session kind values ---

pub const KIND_CHAT: &str = "chat";

pub const KIND_WIZARD: &str = "wizard";
