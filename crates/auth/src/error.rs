//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password did not match any user.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration with a username that is already taken.
    #[error("Username already exists")]
    UsernameTaken,

    /// Registration with a password below the minimum length.
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    /// Registration with a blank username.
    #[error("Username is required")]
    UsernameRequired,

    /// No user is logged in.
    #[error("Not logged in")]
    NotLoggedIn,

    /// Persisting the user list or session failed.
    #[error("Store error: {0}")]
    Store(#[from] ledger::StoreError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
