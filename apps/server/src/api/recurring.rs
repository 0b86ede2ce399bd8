//! Recurring rule API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::RecurringTransaction;
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use super::{required_text, validate_amount};
use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Lists recurring rules.
pub async fn list_rules<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<ListRecurringResponse>> {
    Ok(Json(ListRecurringResponse {
        rules: state.store.recurring(user.id).await,
    }))
}

/// Creates a rule and records its first occurrence at the start date.
pub async fn create_rule<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateRecurringRequest>,
) -> ServerResult<Json<CreateRecurringResponse>> {
    validate_amount("amount", request.amount)?;
    let category = required_text("category", &request.category)?;

    let rule = RecurringTransaction::new(
        request.amount,
        request.transaction_type,
        category,
        request.description.trim(),
        request.start_date,
        request.frequency,
    );
    ensure_schedulable(&rule)?;
    let (rule, first_transaction) = state.store.add_recurring_rule(user.id, rule).await?;

    Ok(Json(CreateRecurringResponse {
        rule,
        first_transaction,
    }))
}

/// Rejects rules whose second occurrence falls past the end of the calendar.
fn ensure_schedulable(rule: &RecurringTransaction) -> ServerResult<()> {
    match rule.next_after(rule.start_date) {
        Some(_) => Ok(()),
        None => Err(ServerError::InvalidRequest(
            "startDate is too far in the future".to_string(),
        )),
    }
}

/// Deletes a rule. Transactions it already produced are kept.
pub async fn delete_rule<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteRequest>,
) -> ServerResult<Json<SuccessResponse>> {
    state.store.delete_recurring_rule(user.id, request.id).await?;

    Ok(Json(SuccessResponse {}))
}

/// Materializes every due occurrence up to today.
pub async fn process_rules<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<ProcessRecurringResponse>> {
    let processed = state.store.process_recurring(user.id, state.today()).await?;

    Ok(Json(ProcessRecurringResponse {
        generated: processed.generated,
    }))
}
