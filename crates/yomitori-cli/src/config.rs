use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
}

/// Completion endpoint settings. The client requires all four; the only
/// value without a usable default is the API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load config: user file (if it exists) over built-in defaults.
    pub fn load() -> Result<Self, CliError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            let user_str = std::fs::read_to_string(&user_path)?;
            toml::from_str(&user_str).map_err(|e| CliError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "yomitori")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
