//! AI advisor endpoint.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use ledger::KeyValueStore;
use rpc_protocol::responses::AdviceResponse;

use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Asks the AI service for advice on recent spending.
///
/// Service failures produce a fallback message rather than an error.
pub async fn insights<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<AdviceResponse>> {
    let transactions = state.current_transactions(user.id).await?;
    let advice = state.advisor.advise(&transactions).await;

    Ok(Json(AdviceResponse { advice }))
}
