//! User account definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// Credentials are stored as entered; the session copy of a user never
/// carries the password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Login name, unique across all users.
    pub username: String,
    /// Plaintext password. `None` on session copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// When this account was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: Some(password.into()),
            created_at: Utc::now(),
        }
    }

    /// Returns a copy of this user with the password removed.
    pub fn without_password(&self) -> Self {
        Self {
            password: None,
            ..self.clone()
        }
    }

    /// Checks a login attempt against this record.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.as_deref() == Some(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("alice", "secret");

        assert_eq!(user.username, "alice");
        assert_eq!(user.password, Some("secret".to_string()));
    }

    #[test]
    fn test_session_copy_has_no_password() {
        let user = User::new("alice", "secret");
        let session = user.without_password();

        assert_eq!(session.id, user.id);
        assert!(session.password.is_none());

        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn test_matches_is_exact() {
        let user = User::new("Alice", "secret");

        assert!(user.matches("Alice", "secret"));
        assert!(!user.matches("alice", "secret"));
        assert!(!user.matches("Alice", "Secret"));
        assert!(!user.without_password().matches("Alice", "secret"));
    }
}
