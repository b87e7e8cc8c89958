//! Request ID middleware for correlating logs with requests.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the entire request lifecycle. The same ID is echoed back to the
//! client in the `x-request-id` response header.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the request ID.
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}
