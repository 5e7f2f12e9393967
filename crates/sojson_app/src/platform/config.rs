//! RON configuration file and its merge with command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sojson_client::ClientSettings;
use sojson_core::{IndentSize, OperationKind};
use sojson_logging::sojson_info;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "sojson.ron";
pub const BASE_URL_ENV: &str = "SOJSON_BASE_URL";
const DEFAULT_DOWNLOAD_DIR: &str = ".";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Contents of `sojson.ron`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
    pub max_response_bytes: Option<u64>,
    pub download_dir: Option<PathBuf>,
    pub indent: Option<IndentSize>,
    pub operation: Option<OperationKind>,
}

impl AppConfig {
    /// Loads `explicit` if given (it must exist), otherwise `./sojson.ron` when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        sojson_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }
}

/// Values supplied on the command line; they win over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub indent: Option<IndentSize>,
    pub operation: Option<OperationKind>,
}

/// Fully resolved settings the application runs with.
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    pub client: ClientSettings,
    pub download_dir: PathBuf,
    pub indent: IndentSize,
    pub operation: OperationKind,
}

/// Precedence: command line, then environment (base url only), then file, then defaults.
pub fn resolve(config: AppConfig, env_base_url: Option<String>, cli: Overrides) -> RuntimeSettings {
    let mut client = ClientSettings::default();
    if let Some(base_url) = cli
        .base_url
        .or(env_base_url.filter(|url| !url.trim().is_empty()))
        .or(config.base_url)
    {
        client.base_url = base_url;
    }
    if let Some(ms) = config.connect_timeout_ms {
        client.connect_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = config.request_timeout_ms {
        client.request_timeout = Duration::from_millis(ms);
    }
    if let Some(max) = config.max_response_bytes {
        client.max_response_bytes = max;
    }

    RuntimeSettings {
        client,
        download_dir: cli
            .download_dir
            .or(config.download_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR)),
        indent: cli.indent.or(config.indent).unwrap_or_default(),
        operation: cli.operation.or(config.operation).unwrap_or_default(),
    }
}
