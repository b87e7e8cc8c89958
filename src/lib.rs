//! smoke-api: a minimal JSON HTTP service.
//!
//! Exposes a root greeting, a health/uptime probe for container health checks,
//! and a small table of deployment smoke-test routes that answer with a fixed
//! message and the current time.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError, LogFormat};
pub use error::AppError;
pub use crate::http::ServerError;
pub use routes::create_router;
pub use state::AppState;
