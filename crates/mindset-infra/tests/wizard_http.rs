//! End-to-end wizard runs against a mock professor service.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mindset_core::completion::fallback::WIZARD_FALLBACK;
use mindset_core::render::{DisplayText, SessionRenderer};
use mindset_core::session::{WizardOptions, WizardSession};
use mindset_infra::http::HttpCompletionClient;
use mindset_types::chat::Message;
use mindset_types::completion::HistoryMode;
use mindset_types::completion::SessionSummary;
use mindset_types::error::SessionError;
use mindset_types::session::SessionId;
use mindset_types::wizard::{StepStatus, WizardStep};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct Notices(Arc<Mutex<Vec<String>>>);

impl Notices {
    fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl SessionRenderer for Notices {
    fn response(&mut self, text: &DisplayText) {
        self.0.lock().unwrap().push(format!("response:{}", text.to_plain()));
    }

    fn failure(&mut self, notice: &str) {
        self.0.lock().unwrap().push(format!("failure:{notice}"));
    }

    fn session_finished(&mut self, summary: Option<&SessionSummary>) {
        let exchanges = summary.map(|s| s.total_exchanges).unwrap_or_default();
        self.0.lock().unwrap().push(format!("finished:{exchanges}"));
    }
}

fn options() -> WizardOptions {
    WizardOptions {
        advance_delay: Duration::ZERO,
        history_mode: HistoryMode::Server,
    }
}

#[tokio::test]
async fn analyze_moves_to_step_two() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_challenge"))
        .and(body_json(serde_json::json!({
            "challenge": "Missed a deadline",
            "session_id": "default",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "X",
            "session_id": "default",
            "step": "challenge_analysis",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(&server.uri(), None).unwrap();
    let notices = Notices::default();
    let mut wizard = WizardSession::new(SessionId::fixed(), client, notices.clone(), options());

    let outcome = wizard.analyze("Missed a deadline").await.unwrap();

    assert_eq!(outcome.next_step, Some(WizardStep::Assess));
    assert_eq!(wizard.active_step(), Some(WizardStep::Assess));
    assert_eq!(
        wizard.log().snapshot(),
        vec![Message::user("Missed a deadline"), Message::assistant("X")]
    );
    assert_eq!(notices.all(), vec!["response:X"]);
}

#[tokio::test]
async fn server_error_keeps_step_and_log() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_challenge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "X"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/assess_reflection"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "Assessment failed"})),
        )
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(&server.uri(), None).unwrap();
    let notices = Notices::default();
    let mut wizard = WizardSession::new(SessionId::fixed(), client, notices.clone(), options());

    wizard.analyze("Missed a deadline").await.unwrap();
    let err = wizard.assess("I rushed").await.unwrap_err();

    assert!(matches!(err, SessionError::Completion(_)));
    assert_eq!(wizard.active_step(), Some(WizardStep::Assess));
    assert_eq!(wizard.steps().current_status(), StepStatus::Failed);
    assert_eq!(wizard.log().len(), 2);
    assert_eq!(
        notices.all().last().cloned(),
        Some(format!("failure:{WIZARD_FALLBACK}"))
    );
}

#[tokio::test]
async fn full_run_reports_summary() {
    let server = MockServer::start().await;
    for endpoint in ["/analyze_challenge", "/assess_reflection"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"response": "ok"})))
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/finalize_session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Well done",
            "session_summary": {
                "total_exchanges": 6,
                "completed_steps": ["challenge_analysis", "reflection_assessment", "action_planning"],
            },
        })))
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(&server.uri(), None).unwrap();
    let notices = Notices::default();
    let mut wizard = WizardSession::new(SessionId::fixed(), client, notices.clone(), options());

    wizard.analyze("Missed a deadline").await.unwrap();
    wizard.assess("I rushed").await.unwrap();
    let outcome = wizard.finalize("Plan earlier").await.unwrap();

    assert_eq!(outcome.next_step, None);
    assert!(wizard.is_finished());
    assert_eq!(wizard.log().len(), 6);
    assert_eq!(notices.all().last().map(String::as_str), Some("finished:6"));
}
