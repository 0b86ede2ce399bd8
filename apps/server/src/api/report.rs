//! Report API endpoints.

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Filters transactions and totals the result.
pub async fn filter_report<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<FilterReportRequest>,
) -> ServerResult<Json<FilterReportResponse>> {
    let transactions = state.current_transactions(user.id).await?;

    Ok(Json(analytics::build_report(&transactions, &request)))
}

/// Exports the filtered transactions as a CSV attachment.
///
/// Fails with 400 when nothing matches the filter.
pub async fn export_report<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ExportReportRequest>,
) -> ServerResult<Response> {
    let transactions = state.current_transactions(user.id).await?;
    let rows = analytics::filter_transactions(&transactions, &request);
    if rows.is_empty() {
        return Err(ServerError::EmptyReport);
    }

    let filename = analytics::export_filename(state.today());
    tracing::info!(user_id = %user.id, rows = rows.len(), %filename, "Report exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        analytics::to_csv(&rows),
    )
        .into_response())
}
