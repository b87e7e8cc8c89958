//! smoke-api entry point.
//!
//! Parses CLI arguments, resolves configuration from the environment,
//! initializes tracing, captures the process start time, builds the router and
//! serves until SIGINT/SIGTERM. Configuration and bind failures exit non-zero.

use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smoke_api::config::{Config, LogFormat, DEFAULT_LOG_FILTER};
use smoke_api::{create_router, http, AppState};

/// smoke-api: greeting, health and deployment smoke-test endpoints
#[derive(Parser, Debug)]
#[command(name = "smoke-api", version, about)]
struct Args {
    /// Log level filter (e.g., "smoke_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format, overrides LOG_FORMAT
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(log_filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started_at = Instant::now();
    let args = Args::parse();

    // Resolved before tracing so LOG_FORMAT can pick the layer; a bad value
    // is reported on stderr by the returned error
    let mut config = Config::from_env()?;
    if let Some(format) = args.log_format {
        config.log_format = format;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, config.log_format);

    tracing::debug!(
        host = %config.host,
        port = config.port,
        log_format = %config.log_format,
        "Loaded configuration"
    );

    let state = AppState::with_start(config.clone(), started_at);
    let app = create_router(state);

    if let Err(e) = http::start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
