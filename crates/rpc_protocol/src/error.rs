//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Numeric codes carried in [`ErrorBody`].
pub mod error_codes {
    /// Malformed or invalid request parameters.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unexpected server-side failure.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// No active session.
    pub const AUTHENTICATION_REQUIRED: i32 = -32001;
    /// Username or password mismatch.
    pub const INVALID_CREDENTIALS: i32 = -32002;
    /// The requested record does not exist.
    pub const RESOURCE_NOT_FOUND: i32 = -32003;
    /// The request conflicts with existing data.
    pub const CONFLICT: i32 = -32004;
    /// There is nothing to export.
    pub const EMPTY_REPORT: i32 = -32010;
}

/// Error details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

/// `{"error": {"code": .., "message": ..}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

impl ErrorBody {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            error: ApiError {
                code,
                message: message.into(),
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let body = ErrorBody::new(error_codes::RESOURCE_NOT_FOUND, "Budget not found");
        let json = serde_json::to_string(&body).unwrap();

        assert_eq!(
            json,
            r#"{"error":{"code":-32003,"message":"Budget not found"}}"#
        );
    }
}
