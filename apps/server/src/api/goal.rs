//! Savings goal API endpoints.

use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use entities::SavingsGoal;
use ledger::KeyValueStore;
use rpc_protocol::{requests::*, responses::*};

use super::{required_text, validate_amount};
use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Lists goals with their progress.
pub async fn list_goals<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<ListGoalsResponse>> {
    let goals = state.store.goals(user.id).await;

    Ok(Json(ListGoalsResponse {
        goals: analytics::goal_progress(&goals),
    }))
}

pub async fn create_goal<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateGoalRequest>,
) -> ServerResult<Json<GoalResponse>> {
    let name = required_text("name", &request.name)?;
    validate_amount("targetAmount", request.target_amount)?;
    validate_amount("currentAmount", request.current_amount)?;

    let goal = SavingsGoal::new(name, request.target_amount, request.target_date)
        .with_current_amount(request.current_amount);
    let goal = state.store.create_goal(user.id, goal).await?;

    Ok(Json(GoalResponse { goal }))
}

/// Sets how much has been saved towards a goal.
pub async fn update_progress<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateGoalProgressRequest>,
) -> ServerResult<Json<GoalResponse>> {
    validate_amount("currentAmount", request.current_amount)?;

    let goal = state
        .store
        .update_goal_progress(user.id, request.id, request.current_amount)
        .await?;

    Ok(Json(GoalResponse { goal }))
}

pub async fn delete_goal<K: KeyValueStore>(
    State(state): State<Arc<AppState<K>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<DeleteRequest>,
) -> ServerResult<Json<SuccessResponse>> {
    state.store.delete_goal(user.id, request.id).await?;

    Ok(Json(SuccessResponse {}))
}
