//! Health and reference data endpoints.

use axum::Json;
use entities::Category;
use rpc_protocol::responses::{CategoriesResponse, HealthResponse};

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Lists the suggested transaction categories.
pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: Category::ALL.iter().map(|c| c.to_string()).collect(),
    })
}
