//! Client side of the external prediction service.
//!
//! The controller only sees [`PredictionService`]; the HTTP implementation
//! lives in [`http`] and tests substitute their own.

use thiserror::Error;

use crate::detection::{ClassificationResult, InvalidResult, RandomSample};

/// HTTP implementation backed by `ureq`.
pub mod http;

pub use http::HttpPredictionService;

/// Failures talking to the prediction service.
///
/// None of these are fatal: callers log them and keep their previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Connection, DNS, timeout or body read failure.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("Service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    /// The body was not a usable prediction payload.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<InvalidResult> for ServiceError {
    fn from(err: InvalidResult) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Remote classifier used by the input controller.
///
/// Calls block; the controller runs them on worker threads.
pub trait PredictionService: Send + Sync {
    /// Classify user-provided text.
    fn classify(&self, text: &str) -> Result<ClassificationResult, ServiceError>;

    /// Ask the service for a random example and its classification.
    fn random_sample(&self) -> Result<RandomSample, ServiceError>;
}
