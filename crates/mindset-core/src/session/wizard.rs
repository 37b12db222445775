//! Guided reflection wizard session.
//!
//! Drives the three steps (analyze, assess, finalize) in order. Each step:
//! validate input, go pending, call the step's endpoint, record and render
//! the reply, then after a short pause activate the next step. A failed
//! step stays active and can be submitted again.

use std::time::Duration;

use tracing::{debug, info, warn};

use mindset_types::completion::{CompletionRequest, CompletionResponse, HistoryMode};
use mindset_types::config::MindsetConfig;
use mindset_types::error::{SessionError, StepError, ValidationError};
use mindset_types::session::SessionId;
use mindset_types::wizard::{StepStatus, WizardStep};

use crate::completion::CompletionClient;
use crate::completion::fallback::{WIZARD_FALLBACK, empty_step_notice};
use crate::conversation::ConversationLog;
use crate::render::{DisplayText, SessionRenderer};
use crate::wizard::StepController;

/// Tunables for a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    /// Pause between rendering a step's reply and activating the next step.
    pub advance_delay: Duration,
    /// Whether step requests carry the conversation history.
    pub history_mode: HistoryMode,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(1000),
            history_mode: HistoryMode::Server,
        }
    }
}

impl From<&MindsetConfig> for WizardOptions {
    fn from(config: &MindsetConfig) -> Self {
        Self {
            advance_delay: config.advance_delay(),
            history_mode: config.wizard_history_mode,
        }
    }
}

/// Result of a successful step submission.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub step: WizardStep,
    pub response: CompletionResponse,
    /// Step activated afterwards; `None` once the wizard is finished.
    pub next_step: Option<WizardStep>,
}

/// One run through the reflection wizard.
pub struct WizardSession<C, R> {
    id: SessionId,
    log: ConversationLog,
    steps: StepController,
    options: WizardOptions,
    client: C,
    renderer: R,
}

impl<C: CompletionClient, R: SessionRenderer> WizardSession<C, R> {
    pub fn new(id: SessionId, client: C, renderer: R, options: WizardOptions) -> Self {
        Self {
            id,
            log: ConversationLog::new(),
            steps: StepController::for_wizard(),
            options,
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

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The step currently accepting input, or `None` once finished.
    pub fn active_step(&self) -> Option<WizardStep> {
        if self.steps.is_finished() {
            return None;
        }
        WizardStep::from_number(self.steps.current())
    }

    pub fn progress(&self) -> f32 {
        self.steps.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_finished()
    }

    /// Render the active step. Call once before the first submission.
    pub fn open(&mut self) {
        if let Some(step) = self.active_step() {
            self.renderer.step_activated(step, self.steps.progress());
        }
    }

    /// Submit text for whichever step is active.
    pub async fn submit(&mut self, input: &str) -> Result<StepOutcome, SessionError> {
        self.settle()?;
        let step = self.active_step().ok_or(StepError::Finished)?;
        self.submit_step(step, input).await
    }

    /// Step 1: analyze the student's challenge.
    pub async fn analyze(&mut self, challenge: &str) -> Result<StepOutcome, SessionError> {
        self.submit_step(WizardStep::Analyze, challenge).await
    }

    /// Step 2: assess the student's reflection.
    pub async fn assess(&mut self, reflection: &str) -> Result<StepOutcome, SessionError> {
        self.submit_step(WizardStep::Assess, reflection).await
    }

    /// Step 3: finalize with the student's action plan.
    pub async fn finalize(&mut self, action_plan: &str) -> Result<StepOutcome, SessionError> {
        self.submit_step(WizardStep::Finalize, action_plan).await
    }

    async fn submit_step(
        &mut self,
        step: WizardStep,
        input: &str,
    ) -> Result<StepOutcome, SessionError> {
        self.settle()?;

        let text = input.trim();
        if text.is_empty() {
            self.renderer.invalid_input(&empty_step_notice(step));
            return Err(ValidationError::EmptyInput {
                field: step.payload_field(),
            }
            .into());
        }

        let conversation_history = match self.options.history_mode {
            HistoryMode::Client => Some(self.log.snapshot()),
            HistoryMode::Server => None,
        };
        let request = CompletionRequest::Step {
            step,
            text: text.to_string(),
            session_id: self.id.clone(),
            conversation_history,
        };

        let guard = self.steps.begin(step.number())?;
        self.renderer.pending_changed(true);
        debug!(session_id = %self.id, %step, "Submitting wizard step");

        let response = match self.client.complete(&request).await {
            Ok(response) => {
                guard.complete();
                response
            }
            Err(err) => {
                guard.fail();
                warn!(session_id = %self.id, %step, error = %err, "Wizard step failed");
                self.renderer.failure(WIZARD_FALLBACK);
                self.renderer.pending_changed(false);
                return Err(err.into());
            }
        };

        self.log.record_exchange(text, response.response.clone());
        self.renderer
            .response(&DisplayText::from_completion(&response.response));
        self.renderer.pending_changed(false);

        let next_step = if step.is_terminal() {
            self.steps.finish()?;
            info!(session_id = %self.id, exchanges = self.log.len(), "Wizard session finished");
            self.renderer
                .session_finished(response.session_summary.as_ref());
            None
        } else {
            if !self.options.advance_delay.is_zero() {
                tokio::time::sleep(self.options.advance_delay).await;
            }
            self.activate_next()?
        };

        Ok(StepOutcome {
            step,
            response,
            next_step,
        })
    }

    /// Activate the next step if the active one already completed but was
    /// never advanced (the submitting future was dropped during the pause).
    fn settle(&mut self) -> Result<(), StepError> {
        if !self.steps.is_finished()
            && !self.steps.is_terminal()
            && self.steps.current_status() == StepStatus::Completed
        {
            self.activate_next()?;
        }
        Ok(())
    }

    fn activate_next(&mut self) -> Result<Option<WizardStep>, StepError> {
        let number = self.steps.advance()?;
        let next = WizardStep::from_number(number);
        if let Some(step) = next {
            info!(session_id = %self.id, %step, "Wizard step activated");
            self.renderer.step_activated(step, self.steps.progress());
        }
        Ok(next)
    }
}
