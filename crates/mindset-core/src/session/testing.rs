//! Scripted client and recording renderer shared by session tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use mindset_types::completion::{CompletionRequest, CompletionResponse, SessionSummary};
use mindset_types::error::CompletionError;
use mindset_types::wizard::WizardStep;

use crate::completion::CompletionClient;
use crate::render::{DisplayText, SessionRenderer};

/// Ordered record of client and renderer activity.
pub(crate) type Events = Arc<Mutex<Vec<String>>>;

pub(crate) fn events() -> Events {
    Arc::new(Mutex::new(Vec::new()))
}

pub(crate) fn snapshot(events: &Events) -> Vec<String> {
    events.lock().unwrap().clone()
}

pub(crate) enum Reply {
    Text(String),
    Full(CompletionResponse),
    Status(u16),
    Hang,
}

pub(crate) struct MockClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<CompletionRequest>>,
    events: Events,
}

impl MockClient {
    pub(crate) fn new(events: &Events, replies: Vec<Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            events: events.clone(),
        })
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl CompletionClient for MockClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.events
            .lock()
            .unwrap()
            .push(format!("request:{}", request.endpoint()));
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(CompletionResponse::text(text)),
            Some(Reply::Full(response)) => Ok(response),
            Some(Reply::Status(status)) => Err(CompletionError::Status {
                endpoint: request.endpoint().to_string(),
                status,
            }),
            Some(Reply::Hang) => std::future::pending().await,
            None => Err(CompletionError::Transport {
                endpoint: request.endpoint().to_string(),
                message: "no scripted reply".to_string(),
            }),
        }
    }
}

pub(crate) struct RecordingRenderer {
    events: Events,
}

impl RecordingRenderer {
    pub(crate) fn new(events: &Events) -> Self {
        Self {
            events: events.clone(),
        }
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl SessionRenderer for RecordingRenderer {
    fn pending_changed(&mut self, pending: bool) {
        self.push(format!("pending:{pending}"));
    }

    fn user_message(&mut self, text: &str) {
        self.push(format!("user:{text}"));
    }

    fn response(&mut self, text: &DisplayText) {
        self.push(format!("response:{}", text.to_html()));
    }

    fn failure(&mut self, notice: &str) {
        self.push(format!("failure:{notice}"));
    }

    fn invalid_input(&mut self, notice: &str) {
        self.push(format!("invalid:{notice}"));
    }

    fn step_activated(&mut self, step: WizardStep, _progress: f32) {
        self.push(format!("step:{step}"));
    }

    fn session_finished(&mut self, summary: Option<&SessionSummary>) {
        let exchanges = summary.map(|s| s.total_exchanges).unwrap_or_default();
        self.push(format!("finished:{exchanges}"));
    }
}
