//! Root greeting endpoint.

use axum::Json;
use serde::Serialize;

/// Fixed greeting returned from `/`
pub const ROOT_MESSAGE: &str = "Hello from root API";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Root handler.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}
