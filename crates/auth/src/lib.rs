//! Account registration, login and session handling for FinanceFlow.
//!
//! Credentials are compared as stored, and the session is a single record
//! holding the password-stripped copy of whoever logged in last. This is a
//! single-tenant trust model: there are no tokens, hashing or lockouts.

mod error;
mod service;

pub use error::*;
pub use service::*;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 4;
