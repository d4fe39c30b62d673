pub mod health;
pub mod regions;
pub mod sports;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::middleware::{cors, logger};
use crate::state::AppState;

/// Wires middleware, the health check, and the versioned API group.
pub fn build_router(state: AppState) -> Router {
    let api_v1 = Router::new()
        // Sports routes
        .route("/sports", get(sports::get_sports))
        .route("/sports/{id}", get(sports::get_sport_by_id))
        // Regions routes
        .route("/regions", get(regions::get_regions))
        .route("/regions/{code}", get(regions::get_region_by_code));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1)
        // Unmatched routes get the same error envelope as everything else
        .fallback(|| async { ApiError::NotFound })
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(logger::request_logger))
        .with_state(state)
}
