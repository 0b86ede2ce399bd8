//! Session middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use entities::User;
use ledger::KeyValueStore;
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;

/// The user of the active session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID.
    pub id: Uuid,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self { id: user.id }
    }
}

/// Session middleware.
///
/// Loads the stored session and places the user in the request extensions.
/// Requests without a session are rejected with 401.
pub async fn require_session<K: KeyValueStore + 'static>(
    State(state): State<Arc<AppState<K>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = match auth::current_user(&state.store).await {
        Ok(user) => user,
        Err(_) => return ServerError::AuthenticationRequired.into_response(),
    };

    request
        .extensions_mut()
        .insert(AuthenticatedUser::from(user));

    next.run(request).await
}
