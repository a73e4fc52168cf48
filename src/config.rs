//! Application configuration: where the store lives and how slow it pretends
//! to be.
//!
//! Configuration comes from an optional `config.toml` (path overridable via
//! `NEXUS_CONFIG`), with `NEXUS_DATA_DIR` and `NEXUS_LATENCY_MS` environment
//! overrides applied on top. A missing file is not an error; defaults apply.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::{Error, Result};

const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LATENCY_MS: u64 = 500;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the store's JSON files
    pub data_dir: PathBuf,
    /// Simulated backend latency applied to every facade operation, in
    /// milliseconds. Zero disables the delay.
    pub latency_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl AppConfig {
    /// The simulated latency as a `Duration`.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Loads the application configuration.
///
/// # Errors
/// Returns `Error::Config` when the config file exists but cannot be read or
/// parsed, or when `NEXUS_LATENCY_MS` is set to a non-integer.
pub fn load_config() -> Result<AppConfig> {
    let path = env::var("NEXUS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    debug!("Attempting to load configuration from: {:?}", path);

    let mut config = match fs::read_to_string(&path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config file {path}: {e}"),
        })?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No config file at {:?}, using defaults.", path);
            AppConfig::default()
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read config file {path}: {e}"),
            });
        }
    };

    if let Ok(data_dir) = env::var("NEXUS_DATA_DIR") {
        config.data_dir = PathBuf::from(data_dir);
    }
    if let Ok(raw) = env::var("NEXUS_LATENCY_MS") {
        config.latency_ms = raw.parse().map_err(|e| Error::Config {
            message: format!("NEXUS_LATENCY_MS must be a whole number of milliseconds: {e}"),
        })?;
    }

    info!(
        "Configuration loaded: data_dir={:?}, latency_ms={}",
        config.data_dir, config.latency_ms
    );
    Ok(config)
}
