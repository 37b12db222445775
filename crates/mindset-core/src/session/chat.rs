//! Freeform chat session.
//!
//! Every turn posts the message together with the full conversation so
//! far to `/chat`; the server keeps no state the client depends on.

use tracing::{debug, warn};

use mindset_types::completion::{CompletionRequest, CompletionResponse};
use mindset_types::error::{SessionError, ValidationError};
use mindset_types::session::SessionId;
use mindset_types::wizard::StepStatus;

use crate::completion::CompletionClient;
use crate::completion::fallback::{CHAT_FALLBACK, EMPTY_MESSAGE_NOTICE};
use crate::conversation::ConversationLog;
use crate::render::{DisplayText, SessionRenderer};
use crate::wizard::PendingGuard;

/// One freeform conversation with the professor.
pub struct ChatSession<C, R> {
    id: SessionId,
    log: ConversationLog,
    /// State of the latest turn.
    status: StepStatus,
    client: C,
    renderer: R,
}

impl<C: CompletionClient, R: SessionRenderer> ChatSession<C, R> {
    pub fn new(id: SessionId, client: C, renderer: R) -> Self {
        Self {
            id,
            log: ConversationLog::new(),
            status: StepStatus::Idle,
            client,
            renderer,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// State of the latest turn.
    pub fn status(&self) -> StepStatus {
        self.status
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Send one message and render the professor's reply.
    ///
    /// Whitespace-only input is rejected without a request. On failure the
    /// canned apology is rendered and nothing is added to the log.
    pub async fn send(&mut self, input: &str) -> Result<CompletionResponse, SessionError> {
        let message = input.trim();
        if message.is_empty() {
            self.renderer.invalid_input(EMPTY_MESSAGE_NOTICE);
            return Err(ValidationError::EmptyInput { field: "message" }.into());
        }

        self.renderer.user_message(message);

        let request = CompletionRequest::Chat {
            message: message.to_string(),
            session_id: self.id.clone(),
            conversation_history: self.log.snapshot(),
        };

        let guard = PendingGuard::enter(&mut self.status);
        self.renderer.pending_changed(true);
        debug!(session_id = %self.id, history = self.log.len(), "Sending chat message");

        let outcome = match self.client.complete(&request).await {
            Ok(response) => {
                guard.complete();
                self.log.record_exchange(message, response.response.clone());
                self.renderer
                    .response(&DisplayText::from_completion(&response.response));
                Ok(response)
            }
            Err(err) => {
                guard.fail();
                warn!(session_id = %self.id, error = %err, "Chat completion failed");
                self.renderer.failure(CHAT_FALLBACK);
                Err(err.into())
            }
        };

        self.renderer.pending_changed(false);
        outcome
    }
}
