use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::{ApiResponse, Sport};
use crate::state::AppState;

// Query parameters for listing sports
#[derive(Deserialize)]
pub struct ListSportsQuery {
    #[serde(default)]
    active: Option<String>,
}

// GET /api/v1/sports - List sports, optionally only active ones
pub async fn get_sports(
    State(state): State<AppState>,
    Query(params): Query<ListSportsQuery>,
) -> Result<Json<ApiResponse<Vec<Sport>>>, ApiError> {
    let active_only = params.active.as_deref() == Some("true");

    let result = if active_only {
        state.sports.get_active_sports().await
    } else {
        state.sports.get_all_sports().await
    };
    let sports = result.map_err(|_| ApiError::Internal)?;

    Ok(Json(ApiResponse::new(sports)))
}

// GET /api/v1/sports/:id - Get sport by UUID
pub async fn get_sport_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Sport>>, ApiError> {
    // A malformed id is deliberately indistinguishable from a missing row.
    let sport = state
        .sports
        .get_sport_by_id(&id)
        .await
        .map_err(|_| ApiError::NotFound)?;

    Ok(Json(ApiResponse::new(sport)))
}
