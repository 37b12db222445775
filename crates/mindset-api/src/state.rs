//! Application state shared by all commands.
//!
//! Pins the session orchestrators to the concrete reqwest-backed client.

use std::sync::Arc;

use mindset_infra::config::{load_effective_config, resolve_data_dir};
use mindset_infra::http::HttpCompletionClient;
use mindset_types::config::MindsetConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: MindsetConfig,
    pub client: Arc<HttpCompletionClient>,
}

impl AppState {
    /// Load configuration and build the HTTP client.
    ///
    /// `url_override` (from `--url`) beats both the environment and the file.
    pub async fn init(url_override: Option<&str>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let mut config = load_effective_config(&data_dir).await;
        if let Some(url) = url_override {
            config.base_url = url.to_string();
        }

        let client = HttpCompletionClient::new(&config.base_url, config.request_timeout())
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;
        tracing::debug!(base_url = %client.base_url(), data_dir = %data_dir.display(), "App state ready");

        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }
}
