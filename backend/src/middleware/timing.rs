//! Request logging and timing middleware

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Response header carrying the handling time in seconds
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Log each request and response and stamp the elapsed time on the response
pub async fn request_timing(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!(%request_id, "Request: {} {}", method, uri);

    let mut response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    tracing::info!(
        %request_id,
        "Response: {} - {:.3}s",
        response.status().as_u16(),
        elapsed
    );

    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    response
}
