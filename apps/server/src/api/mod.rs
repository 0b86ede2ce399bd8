//! API endpoints.

pub mod advisor;
pub mod analytics;
pub mod auth;
pub mod budget;
pub mod goal;
pub mod meta;
pub mod recurring;
pub mod report;
pub mod transaction;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use entities::is_valid_amount;
use ledger::KeyValueStore;

use crate::error::{ServerError, ServerResult};
use crate::middleware::require_session;
use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<K: KeyValueStore + 'static>(
    state: Arc<AppState<K>>,
) -> Router<Arc<AppState<K>>> {
    let protected = Router::new()
        // Session endpoints
        .route("/api/auth/logout", post(auth::logout::<K>))
        .route("/api/auth/me", get(auth::me::<K>))
        // Transaction endpoints
        .route("/api/transaction/list", post(transaction::list_transactions::<K>))
        .route("/api/transaction/create", post(transaction::create_transaction::<K>))
        .route("/api/transaction/delete", post(transaction::delete_transaction::<K>))
        // Recurring rule endpoints
        .route("/api/recurring/list", post(recurring::list_rules::<K>))
        .route("/api/recurring/create", post(recurring::create_rule::<K>))
        .route("/api/recurring/delete", post(recurring::delete_rule::<K>))
        .route("/api/recurring/process", post(recurring::process_rules::<K>))
        // Budget endpoints
        .route("/api/budget/list", post(budget::list_budgets::<K>))
        .route("/api/budget/save", post(budget::save_budget::<K>))
        .route("/api/budget/delete", post(budget::delete_budget::<K>))
        // Savings goal endpoints
        .route("/api/goal/list", post(goal::list_goals::<K>))
        .route("/api/goal/create", post(goal::create_goal::<K>))
        .route("/api/goal/update-progress", post(goal::update_progress::<K>))
        .route("/api/goal/delete", post(goal::delete_goal::<K>))
        // Analytics endpoints
        .route("/api/analytics/dashboard", get(analytics::dashboard::<K>))
        .route("/api/analytics/monthly", get(analytics::monthly::<K>))
        .route("/api/analytics/balance-history", get(analytics::balance_history::<K>))
        // Report endpoints
        .route("/api/report/filter", post(report::filter_report::<K>))
        .route("/api/report/export", post(report::export_report::<K>))
        // Advisor endpoints
        .route("/api/advisor/insights", post(advisor::insights::<K>))
        .route_layer(middleware::from_fn_with_state(state, require_session::<K>));

    Router::new()
        .route("/api/auth/register", post(auth::register::<K>))
        .route("/api/auth/login", post(auth::login::<K>))
        .route("/api/meta/categories", get(meta::categories))
        // Health check
        .route("/health", get(meta::health_check))
        .merge(protected)
}

/// Rejects negative and non-finite amounts.
pub(crate) fn validate_amount(field: &str, amount: f64) -> ServerResult<()> {
    if is_valid_amount(amount) {
        Ok(())
    } else {
        Err(ServerError::InvalidRequest(format!(
            "{field} must be a non-negative number"
        )))
    }
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: &str) -> ServerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServerError::InvalidRequest(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
