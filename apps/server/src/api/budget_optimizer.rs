use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ApiEnvelope, BudgetPlanResponse, MinimumBudgetQuery, OptimizeBudgetBody},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use tripwise_core::{DurationBucket, MinimumBudgetQuote};

/// Validates the request, applies the destination floor and returns the plan.
#[utoipa::path(
    post,
    path = "/api/v1/budget-optimizer/optimize",
    request_body = OptimizeBudgetBody,
    responses(
        (status = 200, description = "Budget plan wrapped in {success, data}"),
        (status = 400, description = "Invalid request or budget below the destination minimum")
    )
)]
pub async fn optimize_budget(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OptimizeBudgetBody>, JsonRejection>,
) -> ApiResult<Json<BudgetPlanResponse>> {
    let Json(body) = payload?;
    let request = body.into_request()?;
    tracing::info!(
        destination = %request.destination,
        duration = %request.duration,
        budget = %request.total_budget,
        "Optimizing budget"
    );
    let plan = state.budget_optimizer_service.optimize(&request)?;
    Ok(Json(ApiEnvelope::ok(plan)))
}

#[utoipa::path(
    get,
    path = "/api/v1/budget-optimizer/minimum",
    params(MinimumBudgetQuery),
    responses(
        (status = 200, description = "Minimum recommended budget"),
        (status = 400, description = "Unknown duration")
    )
)]
pub async fn get_minimum_budget(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MinimumBudgetQuery>, QueryRejection>,
) -> ApiResult<Json<MinimumBudgetQuote>> {
    let Query(query) = query?;
    let duration = query.duration_bucket()?;
    let quote = state
        .budget_optimizer_service
        .minimum_budget(&query.destination, duration);
    Ok(Json(quote))
}

#[utoipa::path(
    get,
    path = "/api/v1/budget-optimizer/durations",
    responses((status = 200, description = "Accepted trip durations"))
)]
pub async fn list_durations(State(state): State<Arc<AppState>>) -> Json<Vec<DurationBucket>> {
    Json(state.budget_optimizer_service.durations())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budget-optimizer/optimize", post(optimize_budget))
        .route("/budget-optimizer/minimum", get(get_minimum_budget))
        .route("/budget-optimizer/durations", get(list_durations))
}
