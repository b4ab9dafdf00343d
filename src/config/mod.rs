//! Service configuration: bind address and data directory, loaded from an
//! optional JSON file in the data directory with environment overrides.

use std::{env, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::utils::app_data_dir;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_host")]
    pub host: String,
    #[serde(default = "Config::default_port")]
    pub port: u16,
    /// Root directory for persisted records. Defaults to the application
    /// data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            data_dir: None,
        }
    }
}

impl Config {
    fn default_host() -> String {
        "0.0.0.0".into()
    }

    fn default_port() -> u16 {
        3000
    }

    /// Reads `<data dir>/config.json` when present, then applies the
    /// `BUDGETD_HOST`, `PORT`, and `BUDGETD_DATA_DIR` environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = app_data_dir().join(CONFIG_FILE);
        let mut config = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };
        if let Ok(host) = env::var("BUDGETD_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", port.clone()))?;
        }
        if let Ok(dir) = env::var("BUDGETD_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(app_data_dir)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
