//! Transaction API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::Transaction;
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use super::{required_text, validate_amount};
use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Lists transactions matching the search, newest first.
pub async fn list_transactions<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ListTransactionsRequest>,
) -> ServerResult<Json<ListTransactionsResponse>> {
    let transactions = state.current_transactions(user.id).await?;

    Ok(Json(ListTransactionsResponse {
        transactions: analytics::search_transactions(&transactions, &request),
    }))
}

/// Records a transaction.
pub async fn create_transaction<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTransactionRequest>,
) -> ServerResult<Json<TransactionResponse>> {
    validate_amount("amount", request.amount)?;
    let category = required_text("category", &request.category)?;

    let transaction = Transaction::new(
        request.amount,
        request.transaction_type,
        category,
        request.date,
        request.description.trim(),
    );
    let transaction = state.store.add_transaction(user.id, transaction).await?;

    Ok(Json(TransactionResponse { transaction }))
}

/// Deletes a transaction.
pub async fn delete_transaction<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteRequest>,
) -> ServerResult<Json<SuccessResponse>> {
    state.store.delete_transaction(user.id, request.id).await?;

    Ok(Json(SuccessResponse {}))
}
