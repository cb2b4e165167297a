// src/error.rs
use thiserror::Error;

/// Failures that can stop a verification attempt or startup.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Non-success HTTP status, transport failure or unreadable body.
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid config {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl From<reqwest::Error> for VerifyError {
    fn from(err: reqwest::Error) -> Self {
        VerifyError::Network(err.to_string())
    }
}

pub type Result<T, E = VerifyError> = std::result::Result<T, E>;
