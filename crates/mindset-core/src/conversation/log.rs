//! Append-only conversation log.
//!
//! Insertion order defines dialogue turn order. Messages cannot be edited
//! or removed; a fresh session starts with a fresh log.

use mindset_types::chat::{Message, MessageRole};

/// Ordered, append-only record of dialogue turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the log.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record one user turn and the assistant's reply, in that order.
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.append(Message::user(user));
        self.append(Message::assistant(assistant));
    }

    /// Copy of the full ordered history, for an outgoing request.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages with the given role.
    pub fn count_role(&self, role: MessageRole) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}
