//! Advisor error types.

use thiserror::Error;

/// Errors that can occur while requesting advice.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No API key is configured.
    #[error("API key is not configured")]
    MissingApiKey,

    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The API answered without any text.
    #[error("Response contained no text")]
    EmptyResponse,
}

/// Result type for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
