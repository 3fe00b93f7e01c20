//! Nutrition targets API routes

use crate::error::ApiError;
use crate::services::NutritionTargetsService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use nutrition_targets_shared::{NutritionTargets, ProfileRecord, ReferenceQuery, ReferenceResponse};

/// Create nutrition targets routes
pub fn targets_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate_targets))
        .route("/references", get(get_reference))
}

/// POST /api/v1/nutrition-targets/calculate - Calculate targets for a profile
///
/// Every profile field is optional. Absent fields are defaulted and listed
/// in `basis.missing_fields`.
async fn calculate_targets(
    State(state): State<AppState>,
    Json(record): Json<ProfileRecord>,
) -> Result<Json<NutritionTargets>, ApiError> {
    let today = Utc::now().date_naive();
    let result = NutritionTargetsService::calculate(&state, record, today)?;
    Ok(Json(result))
}

/// GET /api/v1/nutrition-targets/references - Look up one reference value
async fn get_reference(
    State(state): State<AppState>,
    Query(query): Query<ReferenceQuery>,
) -> Result<Json<ReferenceResponse>, ApiError> {
    let response = NutritionTargetsService::reference(&state, &query)?;
    Ok(Json(response))
}
