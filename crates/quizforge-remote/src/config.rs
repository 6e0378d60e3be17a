//! Remote delegate configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the remote quiz-engine service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Timeouts belong to the transport, not the
    /// engine; on expiry the delegate falls back to local computation.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// The `[remote]` section of a quizforge.toml file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    remote: Option<RemoteConfig>,
}

/// Load the remote configuration.
///
/// Search order:
/// 1. The explicit path, if given (missing file is an error).
/// 2. `quizforge.toml` in the current directory.
/// 3. Built-in defaults.
///
/// The `QUIZFORGE_API_URL` environment variable overrides the base URL in
/// all cases.
pub fn load_remote_config(path: Option<&Path>) -> Result<RemoteConfig> {
    let config_path = match path {
        Some(p) => {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                anyhow::bail!("config file not found: {}", p.display());
            }
        }
        None => {
            let local = PathBuf::from("quizforge.toml");
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let file: ConfigFile = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            file.remote.unwrap_or_default()
        }
        None => RemoteConfig::default(),
    };

    if let Ok(url) = std::env::var("QUIZFORGE_API_URL") {
        if !url.is_empty() {
            config.base_url = url;
        }
    }

    Ok(config)
}
