//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preview rendering defaults.
    pub preview: PreviewDefaults,

    /// Coordinate sampling defaults.
    pub sampling: SamplingDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Defaults for the preview projection surface and its render loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewDefaults {
    /// Fixed reference width of the preview surface in pixels.
    pub reference_width: u32,

    /// Render loop tick rate (frames per second).
    pub fps: u32,
}

/// Defaults for the recording sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingDefaults {
    /// Interval between coordinate samples, in milliseconds.
    pub interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "reframe=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for PreviewDefaults {
    fn default() -> Self {
        Self {
            reference_width: 300,
            fps: 60,
        }
    }
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("reframe").join("config.json")
}
