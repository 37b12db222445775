//! Conversation history kept for the lifetime of a session.

pub mod log;

pub use log::ConversationLog;
