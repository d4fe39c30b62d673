use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// CORS policy for browser clients. Origins are a static allow-list;
/// credentials are allowed, so a wildcard is not an option.
pub fn cors_layer() -> CorsLayer {
    let origins = [
        // Next.js dev server
        HeaderValue::from_static("http://localhost:3000"),
        // Production domain (to be updated)
        HeaderValue::from_static("https://crewee.example.com"),
    ];

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE)
}
