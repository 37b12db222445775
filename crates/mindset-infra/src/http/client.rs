//! HttpCompletionClient -- concrete [`CompletionClient`] over reqwest.
//!
//! Posts JSON bodies to the service's endpoints and reads the `response`
//! field back. One request per call: no retries. Any non-2xx status is a
//! failure regardless of the body.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use mindset_core::completion::CompletionClient;
use mindset_types::completion::{CompletionRequest, CompletionResponse};
use mindset_types::error::CompletionError;
use mindset_types::remote::{HealthStatus, ResetAck, SessionHistory};
use mindset_types::session::SessionId;

const HEALTH_ENDPOINT: &str = "/health";
const HISTORY_ENDPOINT: &str = "/get_session_history";
const RESET_ENDPOINT: &str = "/reset_session";

/// reqwest-backed client for the professor service.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCompletionClient {
    /// Create a client for `base_url`.
    ///
    /// `timeout` of `None` leaves reqwest's default (no overall timeout).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, CompletionError> {
        let response = self
            .client
            .get(self.url(HEALTH_ENDPOINT))
            .send()
            .await
            .map_err(|e| transport_error(HEALTH_ENDPOINT, e))?;
        read_json(HEALTH_ENDPOINT, response).await
    }

    /// `GET /get_session_history?session_id=...`: the server's record of a session.
    pub async fn session_history(
        &self,
        session_id: &SessionId,
    ) -> Result<SessionHistory, CompletionError> {
        let response = self
            .client
            .get(self.url(HISTORY_ENDPOINT))
            .query(&[("session_id", session_id.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(HISTORY_ENDPOINT, e))?;
        read_json(HISTORY_ENDPOINT, response).await
    }

    /// `POST /reset_session`: drop the server's record of a session.
    pub async fn reset_session(&self, session_id: &SessionId) -> Result<ResetAck, CompletionError> {
        let response = self
            .client
            .post(self.url(RESET_ENDPOINT))
            .json(&serde_json::json!({ "session_id": session_id }))
            .send()
            .await
            .map_err(|e| transport_error(RESET_ENDPOINT, e))?;
        read_json(RESET_ENDPOINT, response).await
    }
}

impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let endpoint = request.endpoint();
        debug!(endpoint, session_id = %request.session_id(), "Posting completion request");

        let response = self
            .client
            .post(self.url(endpoint))
            .json(&request.body())
            .send()
            .await
            .map_err(|e| transport_error(endpoint, e))?;

        read_json(endpoint, response).await
    }
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> CompletionError {
    CompletionError::Transport {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    }
}

/// Check the status and decode a JSON body.
async fn read_json<T: DeserializeOwned>(
    endpoint: &str,
    response: reqwest::Response,
) -> Result<T, CompletionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(endpoint, status = status.as_u16(), body = %body, "Endpoint returned an error status");
        return Err(CompletionError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CompletionError::Deserialization {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
}
