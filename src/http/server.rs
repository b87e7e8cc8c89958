//! HTTP server startup logic.
//!
//! Binding is a separate step from serving so a bind failure surfaces before
//! anything is logged as listening, and so tests can bind port 0 and learn the
//! assigned port before issuing requests.

use std::future::{Future, IntoFuture};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::config::{Config, SHUTDOWN_GRACE_SECS};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Bind a TCP listener. Failure is not retried.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on `listener` until `signal` resolves.
///
/// After the signal, new connections are refused and in-flight requests get
/// `grace` to complete before the server returns anyway.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    grace: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        signal.await;
        let _ = tx.send(true);
    });

    let mut graceful_rx = rx.clone();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = graceful_rx.wait_for(|stopping| *stopping).await;
        })
        .into_future();

    let mut deadline_rx = rx;
    let deadline = async move {
        let _ = deadline_rx.wait_for(|stopping| *stopping).await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            tracing::info!("Server stopped");
            result.map_err(ServerError::Serve)
        }
        _ = deadline => {
            tracing::warn!(
                grace_secs = grace.as_secs(),
                "Connections still open after grace period, exiting anyway"
            );
            Ok(())
        }
    }
}

/// Bind, log the startup lines and serve until SIGINT/SIGTERM.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &Config) -> Result<(), ServerError> {
    let listener = bind(config.bind_addr()).await?;
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;

    tracing::info!("Server listening on port {}", local_addr.port());
    tracing::info!("Environment: {}", config.environment);

    serve(
        listener,
        app,
        shutdown::shutdown_signal(),
        Duration::from_secs(SHUTDOWN_GRACE_SECS),
    )
    .await
}
