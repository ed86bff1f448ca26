use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub directory: DirectoryConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support (click cards, modal buttons, backdrop).
    pub mouse_enabled: bool,
}

/// Where the employee records come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Base URL of the randomuser.me-compatible API.
    pub endpoint: String,
    /// Number of records requested.
    pub results: usize,
    /// Nationality filter passed as `nat`.
    pub nationality: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: true,
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://randomuser.me/api/".to_string(),
            results: 12,
            nationality: "US".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/employee-directory/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &std::path::Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(crate::NAME).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
