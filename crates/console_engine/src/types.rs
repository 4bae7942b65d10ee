use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Bytes and metadata of a file to upload as the `file` multipart part.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub probability: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictResponse {
    pub predictions: Vec<Prediction>,
}

/// Body of `GET /health`. Missing fields default so older servers still parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Error body the prediction server sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ServerErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PredictCompleted(Result<Vec<Prediction>, ClientError>),
    RetrainCompleted(Result<serde_json::Value, ClientError>),
}

/// A failed request. `message` is the user-facing text; `detail` keeps
/// whatever the server said about it, for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn http_status(code: u16, detail: Option<String>) -> Self {
        Self {
            kind: FailureKind::HttpStatus(code),
            message: format!("Request failed with status code {code}"),
            detail,
        }
    }

    pub(crate) fn network(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            message: "Network Error".to_string(),
            detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidRequest,
    HttpStatus(u16),
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}
