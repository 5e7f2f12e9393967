use std::fmt;

use sojson_core::{OperationKind, ProcessingResult, RequestSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Completed {
        seq: RequestSeq,
        kind: OperationKind,
        result: ProcessingResult,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True for faults raised below the application layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            FailureKind::HttpStatus(_)
                | FailureKind::Timeout
                | FailureKind::Network
                | FailureKind::TooLarge { .. }
        )
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            // The service's own message is what the user needs to see.
            FailureKind::Rejected => f.write_str(&self.message),
            _ if self.message.is_empty() => write!(f, "{}", self.kind),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for ProcessingResult {
    fn from(err: ClientError) -> Self {
        ProcessingResult::Failed {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidResponse,
    /// The service answered but reported the operation as failed.
    Rejected,
    /// The background request worker has shut down.
    WorkerStopped,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid service url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidResponse => write!(f, "invalid response"),
            FailureKind::Rejected => write!(f, "rejected by service"),
            FailureKind::WorkerStopped => write!(f, "worker stopped"),
        }
    }
}
