use std::fmt;
use std::io;

use match_core::{MatchResult, RefineResult, RequestFailure, RequestId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    AnalyzeCompleted {
        request_id: RequestId,
        result: Result<MatchResult, ApiError>,
    },
    RefineCompleted {
        request_id: RequestId,
        result: Result<RefineResult, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Non-2xx response; `detail` is the JSON error body's `detail` field.
    HttpStatus { status: u16, detail: Option<String> },
    Timeout,
    Network,
    /// 2xx response whose body is not the expected JSON shape.
    MalformedBody,
    /// The resume file could not be read from disk.
    FileRead,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus { status, .. } => write!(f, "http status {status}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
            FailureKind::FileRead => write!(f, "file read error"),
        }
    }
}

impl From<ApiError> for RequestFailure {
    fn from(err: ApiError) -> Self {
        match err.kind {
            FailureKind::HttpStatus { status, detail } => RequestFailure::Server { status, detail },
            FailureKind::MalformedBody => RequestFailure::MalformedBody(err.message),
            FailureKind::InvalidUrl
            | FailureKind::Timeout
            | FailureKind::Network
            | FailureKind::FileRead => RequestFailure::Transport(err.message),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
    #[error("request engine has stopped")]
    Stopped,
}
