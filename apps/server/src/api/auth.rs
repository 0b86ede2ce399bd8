//! Authentication API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Registers a user and starts their session.
pub async fn register<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Json(request): Json<RegisterRequest>,
) -> ServerResult<Json<SessionResponse>> {
    let user = auth::register(&state.store, &request.username, &request.password).await?;

    Ok(Json(SessionResponse { user }))
}

/// Logs in and brings recurring transactions up to date.
pub async fn login<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Json(request): Json<LoginRequest>,
) -> ServerResult<Json<SessionResponse>> {
    let user = auth::login(&state.store, &request.username, &request.password).await?;
    state.current_transactions(user.id).await?;

    Ok(Json(SessionResponse { user }))
}

/// Ends the session.
pub async fn logout<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
) -> ServerResult<Json<SuccessResponse>> {
    auth::logout(&state.store).await?;

    Ok(Json(SuccessResponse {}))
}

/// Resumes the current session.
pub async fn me<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<SessionResponse>> {
    let session = auth::current_user(&state.store).await?;
    state.current_transactions(user.id).await?;

    Ok(Json(SessionResponse { user: session }))
}
