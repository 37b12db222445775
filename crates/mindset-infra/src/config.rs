//! Configuration loader for Mindset.
//!
//! Reads `config.toml` from the data directory (`~/.mindset/` in production)
//! and deserializes it into [`MindsetConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed. Environment overrides are applied
//! on top.

use std::path::{Path, PathBuf};

use mindset_types::config::MindsetConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MINDSET_DATA_DIR";

/// Environment variable overriding `base_url`.
pub const API_URL_ENV: &str = "MINDSET_API_URL";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `MINDSET_DATA_DIR` environment variable
/// 2. `~/.mindset`
/// 3. `.mindset` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mindset");
    }

    PathBuf::from(".mindset")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`MindsetConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> MindsetConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return MindsetConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return MindsetConfig::default();
        }
    };

    match toml::from_str::<MindsetConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            MindsetConfig::default()
        }
    }
}

/// Apply environment overrides using `lookup` to read variables.
///
/// Empty values are ignored.
pub fn apply_env_overrides(config: &mut MindsetConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!(base_url = %url, "Using base URL from {API_URL_ENV}");
        config.base_url = url.trim().to_string();
    }
}

/// Load `config.toml` and apply overrides from the process environment.
pub async fn load_effective_config(data_dir: &Path) -> MindsetConfig {
    let mut config = load_config(data_dir).await;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindset_types::completion::HistoryMode;
    use mindset_types::config::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, MindsetConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
base_url = "http://127.0.0.1:5000"
advance_delay_ms = 0
wizard_history_mode = "client"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.advance_delay_ms, 0);
        assert_eq!(config.wizard_history_mode, HistoryMode::Client);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = MindsetConfig::default();
        apply_env_overrides(&mut config, |key| {
            (key == API_URL_ENV).then(|| " http://localhost:8080 ".to_string())
        });
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn empty_env_override_is_ignored() {
        let mut config = MindsetConfig::default();
        apply_env_overrides(&mut config, |_| Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
