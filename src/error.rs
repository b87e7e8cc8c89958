use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound { path: String },
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    path: &'a str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let path = match &self {
            AppError::NotFound { path } => path.as_str(),
        };

        tracing::debug!(status = status.as_u16(), path = %path, "Unmatched route");

        let body = ErrorBody {
            error: self.to_string(),
            path,
        };
        (status, Json(body)).into_response()
    }
}
