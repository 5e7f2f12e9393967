use serde::{Deserialize, Serialize};
use sojson_core::{OperationKind, ProcessingRequest, ProcessingResult};

use crate::{ClientError, FailureKind};

/// Request body: `{"text": <string>, "indent": <integer>}`.
#[derive(Debug, Serialize)]
pub struct ApiRequest<'a> {
    pub text: &'a str,
    pub indent: u8,
}

impl<'a> From<&'a ProcessingRequest> for ApiRequest<'a> {
    fn from(request: &'a ProcessingRequest) -> Self {
        Self {
            text: request.text(),
            indent: request.indent().width(),
        }
    }
}

/// Union of the response shapes the service produces.
///
/// Empty fields may be omitted by the service, so everything is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ApiResponse {
    pub success: Option<bool>,
    pub result: Option<String>,
    pub valid: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
}

const DEFAULT_REJECTION: &str = "processing failed";

/// Translates a 2xx body into a result for `kind`.
pub fn interpret(kind: OperationKind, body: &[u8]) -> Result<ProcessingResult, ClientError> {
    let response: ApiResponse = serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::InvalidResponse, err.to_string()))?;

    if response.success == Some(false) {
        let message = response
            .error
            .or(response.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
        return Err(ClientError::new(FailureKind::Rejected, message));
    }

    if kind.is_transform() {
        // A successful answer with no `result` carries the empty string.
        return match response.result {
            Some(text) => Ok(ProcessingResult::Transformed { text }),
            None if response.success == Some(true) => Ok(ProcessingResult::Transformed {
                text: String::new(),
            }),
            None => Err(ClientError::new(
                FailureKind::InvalidResponse,
                "response has neither `success` nor `result`",
            )),
        };
    }

    match response.valid {
        Some(valid) => Ok(ProcessingResult::Validated {
            valid,
            detail: if valid { None } else { response.error },
        }),
        None => Err(ClientError::new(
            FailureKind::InvalidResponse,
            "validate response has no `valid` field",
        )),
    }
}
