//! HTTP server module.
//!
//! Plain HTTP only; TLS is terminated by the platform in front of the service.
//!
//! The server includes:
//! - Fatal, non-retried bind on the configured address
//! - Graceful shutdown on SIGTERM/SIGINT with a bounded drain period

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
