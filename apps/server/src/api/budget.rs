//! Budget API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use super::{required_text, validate_amount};
use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Lists budgets with this month's utilization.
pub async fn list_budgets<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<ListBudgetsResponse>> {
    let transactions = state.current_transactions(user.id).await?;
    let budgets = state.store.budgets(user.id).await;

    Ok(Json(ListBudgetsResponse {
        budgets: analytics::budget_utilization(&budgets, &transactions, state.today()),
    }))
}

/// Sets the monthly limit for a category.
pub async fn save_budget<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<SaveBudgetRequest>,
) -> ServerResult<Json<BudgetResponse>> {
    validate_amount("amount", request.amount)?;
    let category = required_text("category", &request.category)?;

    let budget = state
        .store
        .save_budget(user.id, &category, request.amount)
        .await?;

    Ok(Json(BudgetResponse { budget }))
}

/// Deletes a budget.
pub async fn delete_budget<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteRequest>,
) -> ServerResult<Json<SuccessResponse>> {
    state.store.delete_budget(user.id, request.id).await?;

    Ok(Json(SuccessResponse {}))
}
