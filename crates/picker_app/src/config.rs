use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use picker_engine::{FetchSettings, DEFAULT_ENDPOINT};
use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

const CONFIG_ENV: &str = "AGENT_PICKER_CONFIG";
const CONFIG_FILENAME: &str = "agent_picker.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Runtime settings, read from a RON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub cache_dir: PathBuf,
    pub cache_namespace: String,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_destination: LogDestination,
    pub verbose: bool,
    /// How long the "Picking..." phase lasts before the result is shown.
    pub reveal_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cache_dir: PathBuf::from(".agent_picker"),
            cache_namespace: "valo".to_string(),
            request_timeout_secs: 10,
            max_bytes: 5 * 1024 * 1024,
            log_destination: LogDestination::File,
            verbose: false,
            reveal_delay_ms: 1200,
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        let timeout = Duration::from_secs(self.request_timeout_secs.max(1));
        FetchSettings {
            endpoint: self.endpoint.clone(),
            request_timeout: timeout,
            deadline: timeout,
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Config file location: `$AGENT_PICKER_CONFIG` or `./agent_picker.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse(content: &str) -> Result<AppConfig, String> {
    ron::from_str(content).map_err(|err| err.to_string())
}
