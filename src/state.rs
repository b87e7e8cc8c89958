//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;

/// Shared application state, cloned into every handler.
///
/// Built once before the listener accepts connections and never mutated
/// afterwards, so handlers read it without any locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Monotonic instant captured at process initialization
    pub started_at: Instant,
}

impl AppState {
    /// Creates application state, marking now as the process start.
    pub fn new(config: Config) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Creates application state with an explicit start instant.
    pub fn with_start(config: Config, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }

    /// Whole seconds elapsed since start, rounded down.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
