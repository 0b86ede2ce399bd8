//! Server error types.

use auth::AuthError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledger::StoreError;
use rpc_protocol::{ErrorBody, error_codes};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No active session.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The filtered report has no rows.
    #[error("No transactions match the report filter")]
    EmptyReport,

    /// Storage error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Authentication error.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl ServerError {
    fn parts(&self) -> (StatusCode, i32, String) {
        match self {
            ServerError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_REQUEST,
                msg.clone(),
            ),
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                error_codes::AUTHENTICATION_REQUIRED,
                "Authentication required".to_string(),
            ),
            ServerError::EmptyReport => (
                StatusCode::BAD_REQUEST,
                error_codes::EMPTY_REPORT,
                self.to_string(),
            ),
            ServerError::Store(e @ StoreError::NotFound { .. }) => (
                StatusCode::NOT_FOUND,
                error_codes::RESOURCE_NOT_FOUND,
                e.to_string(),
            ),
            ServerError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            ),
            ServerError::Auth(e) => match e {
                AuthError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    error_codes::INVALID_CREDENTIALS,
                    e.to_string(),
                ),
                AuthError::UsernameTaken => {
                    (StatusCode::CONFLICT, error_codes::CONFLICT, e.to_string())
                }
                AuthError::PasswordTooShort(_) | AuthError::UsernameRequired => (
                    StatusCode::BAD_REQUEST,
                    error_codes::INVALID_REQUEST,
                    e.to_string(),
                ),
                AuthError::NotLoggedIn => (
                    StatusCode::UNAUTHORIZED,
                    error_codes::AUTHENTICATION_REQUIRED,
                    e.to_string(),
                ),
                AuthError::Store(inner) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    inner.to_string(),
                ),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServerError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ServerError::AuthenticationRequired, StatusCode::UNAUTHORIZED),
            (ServerError::EmptyReport, StatusCode::BAD_REQUEST),
            (
                ServerError::Store(StoreError::not_found("Budget", "42")),
                StatusCode::NOT_FOUND,
            ),
            (
                ServerError::Store(StoreError::Other("disk full".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ServerError::Auth(AuthError::UsernameTaken), StatusCode::CONFLICT),
            (
                ServerError::Auth(AuthError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ServerError::Auth(AuthError::PasswordTooShort(4)),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_auth_messages_are_user_facing() {
        let (_, code, message) = ServerError::Auth(AuthError::InvalidCredentials).parts();
        assert_eq!(code, error_codes::INVALID_CREDENTIALS);
        assert_eq!(message, "Invalid username or password");

        let (_, _, message) = ServerError::Auth(AuthError::PasswordTooShort(4)).parts();
        assert_eq!(message, "Password must be at least 4 characters");
    }
}
