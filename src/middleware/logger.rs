use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Emits one structured log event per request, after the response is built.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let host = header_str(request.headers(), &header::HOST);
    let user_agent = header_str(request.headers(), &header::USER_AGENT);
    let bytes_in = content_length(request.headers());
    // Populated when served with connect info; absent under test harnesses.
    let remote_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_default();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let bytes_out = content_length(response.headers());

    tracing::info!(
        request_id = %request_id,
        remote_ip = %remote_ip,
        host = %host,
        method = %method,
        uri = %uri,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        latency = latency.as_micros() as u64,
        latency_human = ?latency,
        bytes_in,
        bytes_out,
        "request completed"
    );

    response
}

fn header_str(headers: &HeaderMap, name: &header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string()
}

fn content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
