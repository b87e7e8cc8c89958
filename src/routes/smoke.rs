//! Deployment smoke-test endpoints.
//!
//! Each route answers with a fixed message and the current time. They exist
//! only so a pipeline can confirm that freshly deployed code is serving; new
//! checks are added by extending [`SMOKE_ROUTES`].

use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A smoke-test route: exact path and the message it answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeRoute {
    pub path: &'static str,
    pub message: &'static str,
}

/// Registered smoke-test routes, in registration order.
pub const SMOKE_ROUTES: &[SmokeRoute] = &[
    SmokeRoute {
        path: "/test-ci",
        message: "CI/CD pipeline is working!",
    },
    SmokeRoute {
        path: "/test-docker-ecr-app-runner",
        message: "Sab sahi hai",
    },
];

#[derive(Debug, Serialize)]
pub struct SmokeResponse {
    pub message: &'static str,
    pub timestamp: String,
}

/// Format an instant as ISO-8601 UTC with millisecond precision and a `Z` suffix.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Answer a smoke-test route with its message and the current time.
pub async fn respond(message: &'static str) -> Json<SmokeResponse> {
    Json(SmokeResponse {
        message,
        timestamp: iso_timestamp(Utc::now()),
    })
}
