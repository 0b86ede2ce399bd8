//! Registration, login and session operations.

use entities::User;
use ledger::{KeyValueStore, LedgerStore};

use crate::{AuthError, AuthResult, MIN_PASSWORD_LENGTH};

/// Registers a new user and logs them in.
///
/// Usernames are compared case-sensitively. Returns the session copy of the
/// new user.
pub async fn register<K: KeyValueStore>(
    store: &LedgerStore<K>,
    username: &str,
    password: &str,
) -> AuthResult<User> {
    if username.trim().is_empty() {
        return Err(AuthError::UsernameRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    let _guard = store.lock().await;
    let mut users = store.users().await;
    if users.iter().any(|u| u.username == username) {
        tracing::info!(username, "Registration rejected: username taken");
        return Err(AuthError::UsernameTaken);
    }

    let user = User::new(username, password);
    users.push(user.clone());
    store.save_users(&users).await?;

    let session = user.without_password();
    store.save_session(&session).await?;

    tracing::info!(user_id = %user.id, username, "User registered");
    Ok(session)
}

/// Logs in with an exact username and password match.
///
/// On success the password-stripped user becomes the current session and is
/// returned.
pub async fn login<K: KeyValueStore>(
    store: &LedgerStore<K>,
    username: &str,
    password: &str,
) -> AuthResult<User> {
    let _guard = store.lock().await;
    let users = store.users().await;
    let user = users
        .iter()
        .find(|u| u.matches(username, password))
        .ok_or(AuthError::InvalidCredentials)?;

    let session = user.without_password();
    store.save_session(&session).await?;

    tracing::info!(user_id = %session.id, "User logged in");
    Ok(session)
}

/// Ends the current session. Logging out without a session is a no-op.
pub async fn logout<K: KeyValueStore>(store: &LedgerStore<K>) -> AuthResult<()> {
    let _guard = store.lock().await;
    store.clear_session().await?;
    tracing::info!("User logged out");
    Ok(())
}

/// Returns the user of the current session.
pub async fn current_user<K: KeyValueStore>(store: &LedgerStore<K>) -> AuthResult<User> {
    store.session().await.ok_or(AuthError::NotLoggedIn)
}

#[cfg(test)]
mod tests {
    use ledger::MemoryKeyValueStore;

    use super::*;

    fn store() -> LedgerStore<MemoryKeyValueStore> {
        LedgerStore::new(MemoryKeyValueStore::new())
    }

    #[tokio::test]
    async fn test_register_creates_session() {
        let store = store();

        let user = register(&store, "alice", "secret").await.unwrap();

        assert_eq!(user.username, "alice");
        assert!(user.password.is_none());
        assert_eq!(store.users().await.len(), 1);
        assert_eq!(current_user(&store).await.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let store = store();
        register(&store, "alice", "secret").await.unwrap();

        let result = register(&store, "alice", "other-password").await;

        assert!(matches!(result, Err(AuthError::UsernameTaken)));
        assert_eq!(store.users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_register_username_is_case_sensitive() {
        let store = store();
        register(&store, "alice", "secret").await.unwrap();

        register(&store, "Alice", "secret").await.unwrap();

        assert_eq!(store.users().await.len(), 2);
    }

    #[tokio::test]
    async fn test_register_validation() {
        let store = store();

        assert!(matches!(
            register(&store, "bob", "abc").await,
            Err(AuthError::PasswordTooShort(4))
        ));
        assert!(matches!(
            register(&store, "  ", "secret").await,
            Err(AuthError::UsernameRequired)
        ));
        assert!(store.users().await.is_empty());
    }

    #[tokio::test]
    async fn test_login_requires_exact_match() {
        let store = store();
        let registered = register(&store, "alice", "secret").await.unwrap();
        logout(&store).await.unwrap();

        assert!(matches!(
            login(&store, "alice", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&store, "ALICE", "secret").await,
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            current_user(&store).await,
            Err(AuthError::NotLoggedIn)
        ));

        let user = login(&store, "alice", "secret").await.unwrap();
        assert_eq!(user.id, registered.id);
        assert!(user.password.is_none());
        assert!(store.session().await.unwrap().password.is_none());
    }

    #[tokio::test]
    async fn test_error_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid username or password"
        );
        assert_eq!(AuthError::UsernameTaken.to_string(), "Username already exists");
        assert_eq!(
            AuthError::PasswordTooShort(4).to_string(),
            "Password must be at least 4 characters"
        );
    }
}
