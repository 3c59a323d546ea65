use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Directory holding the link store, one file per key
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

fn default_store_path() -> String {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/linkboard/store")
        .to_str()
        .unwrap_or("~/.config/linkboard/store")
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

// Load settings from config file and environment variables
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    // Start with default settings
    let mut settings = Settings::default();

    match config_file {
        // An explicitly requested config file must exist and parse.
        Some(path) => {
            let config_text = std::fs::read_to_string(path).map_err(|e| {
                DomainError::Other(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            let file_settings = toml::from_str::<Settings>(&config_text).map_err(|e| {
                DomainError::Other(format!("Failed to parse config {}: {}", path.display(), e))
            })?;
            settings.store_path = file_settings.store_path;
        }
        // The standard location is optional and best effort.
        None => {
            if let Some(config_path) =
                dirs::home_dir().map(|p| p.join(".config/linkboard/config.toml"))
            {
                if config_path.exists() {
                    trace!("Loading config from: {:?}", config_path);
                    if let Ok(config_text) = std::fs::read_to_string(&config_path) {
                        if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                            settings.store_path = file_settings.store_path;
                        }
                    }
                }
            }
        }
    }

    // Override with environment variables
    if let Ok(store_path) = std::env::var("LINKBOARD_STORE_PATH") {
        trace!(
            "Using LINKBOARD_STORE_PATH from environment: {}",
            store_path
        );
        settings.store_path = store_path;
    }

    // Expand ~ and embedded environment variables in the final path
    let expanded = shellexpand::full(&settings.store_path)
        .map_err(|e| DomainError::Other(format!("Failed to expand store path: {}", e)))?;
    settings.store_path = expanded.to_string();

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
