//! HTTP route handlers.
//!
//! Every route is an exact-path GET. Unknown paths and unsupported methods on
//! known paths both answer 404 with a JSON body. Routes whose bodies change on
//! every call (uptime, timestamps) are marked `Cache-Control: no-store`.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod root;
pub mod smoke;

use axum::{
    handler::Handler,
    http::Uri,
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;
use smoke::SMOKE_ROUTES;

/// Fallback for unmatched paths and methods.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
    }
}

/// GET (and implicit HEAD) route whose other methods fall through to 404.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(not_found)
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Root greeting - static, no cache directive
    let root_routes = Router::new().route("/", get_only(root::index));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get_only(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Smoke tests - timestamped, never cached
    let smoke_routes = SMOKE_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            let message = route.message;
            router.route(route.path, get_only(move || smoke::respond(message)))
        })
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(root_routes)
        .merge(health_routes)
        .merge(smoke_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
