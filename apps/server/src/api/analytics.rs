//! Analytics API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use ledger::KeyValueStore;
use rpc_protocol::responses::*;

use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Transactions shown on the dashboard.
const RECENT_LIMIT: usize = 5;

/// Totals, spending by category and the latest transactions.
pub async fn dashboard<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<DashboardResponse>> {
    let transactions = state.current_transactions(user.id).await?;

    Ok(Json(DashboardResponse {
        summary: analytics::summarize(&transactions),
        category_breakdown: analytics::category_breakdown(&transactions),
        recent_transactions: analytics::recent_transactions(&transactions, RECENT_LIMIT),
    }))
}

pub async fn monthly<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<MonthlyResponse>> {
    let transactions = state.current_transactions(user.id).await?;

    Ok(Json(MonthlyResponse {
        months: analytics::monthly_totals(&transactions),
    }))
}

pub async fn balance_history<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<BalanceHistoryResponse>> {
    let transactions = state.current_transactions(user.id).await?;

    Ok(Json(BalanceHistoryResponse {
        points: analytics::balance_history(&transactions),
    }))
}
