use std::time::Duration;

use url::Url;

use crate::{ClientError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:2378";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_response_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolves `{base_url}/api/{endpoint}`, keeping any path prefix of the base.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url, ClientError> {
        let mut base = Url::parse(self.base_url.trim())
            .map_err(|err| ClientError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::new(
                FailureKind::InvalidBaseUrl,
                format!("`{}` cannot carry a path", self.base_url),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&format!("api/{endpoint}"))
            .map_err(|err| ClientError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }
}
