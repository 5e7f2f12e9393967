use futures_util::StreamExt;
use sojson_core::{OperationKind, ProcessingRequest, ProcessingResult};
use sojson_logging::{sojson_debug, sojson_info, sojson_warn};

use crate::wire::{interpret, ApiRequest};
use crate::{ClientError, ClientSettings, FailureKind};

/// Performs exactly one exchange with the service per call. No retry,
/// caching or queueing happens here.
#[async_trait::async_trait]
pub trait RequestClient: Send + Sync {
    async fn send(
        &self,
        kind: OperationKind,
        request: &ProcessingRequest,
    ) -> Result<ProcessingResult, ClientError>;

    /// Like [`RequestClient::send`], folding every error into
    /// [`ProcessingResult::Failed`].
    async fn process(&self, kind: OperationKind, request: &ProcessingRequest) -> ProcessingResult {
        match self.send(kind, request).await {
            Ok(result) => result,
            Err(err) => {
                sojson_warn!("{} request failed: {}", kind, err);
                err.into()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        // Surface a bad base url at start-up rather than on the first request.
        settings.endpoint_url(OperationKind::Format.endpoint())?;
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, http })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl RequestClient for ReqwestClient {
    async fn send(
        &self,
        kind: OperationKind,
        request: &ProcessingRequest,
    ) -> Result<ProcessingResult, ClientError> {
        let url = self.settings.endpoint_url(kind.endpoint())?;
        sojson_debug!(
            "POST {} text_len={} indent={}",
            url,
            request.text().len(),
            request.indent()
        );

        let response = self
            .http
            .post(url)
            .json(&ApiRequest::from(request))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body of a failed exchange is not interpreted.
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        let result = interpret(kind, &body)?;
        sojson_info!("{} completed, response_len={}", kind, body.len());
        Ok(result)
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ClientError {
    ClientError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
