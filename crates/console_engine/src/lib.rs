//! Prediction console engine: HTTP client and background effect execution.
mod client;
mod engine;
mod types;

pub use client::{ClientSettings, PredictionClient, ReqwestClient};
pub use engine::{EngineCommand, EngineHandle};
pub use types::{ClientError, EngineEvent, FailureKind, HealthReport, Prediction, UploadFile};
