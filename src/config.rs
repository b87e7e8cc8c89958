//! Configuration loading and constants.
//!
//! All runtime settings come from environment variables and are resolved once
//! at startup. `Config::resolve` takes a lookup function instead of reading the
//! process environment directly so resolution can be tested without touching
//! global state; `Config::from_env` is the thin wrapper used by the binary.

use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::str::FromStr;

// =============================================================================
// Environment Variables
// =============================================================================

/// Listening port
pub const PORT_VAR: &str = "PORT";

/// Deployment tier label, only ever written to the startup log
pub const ENVIRONMENT_VAR: &str = "NODE_ENV";

/// Bind address
pub const HOST_VAR: &str = "HOST";

/// Log output format (text or json)
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 9001;

/// Environment label used when `NODE_ENV` is unset or empty
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Bind on all interfaces so container health checks can reach the service
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "smoke_api=info,tower_http=info";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Time-varying bodies (uptime, timestamps) must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Process configuration, immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind the listener on
    pub host: IpAddr,
    /// Port to bind the listener on; 0 asks the OS for a free port
    pub port: u16,
    /// Deployment tier label (development, staging, production, ...)
    pub environment: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Resolve configuration from a variable lookup.
    ///
    /// Unset and empty variables fall back to their defaults. Values that are
    /// present but malformed are errors rather than silently defaulted.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        let host = match var(HOST_VAR) {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => DEFAULT_HOST,
        };

        let environment = var(ENVIRONMENT_VAR)
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let log_format = match var(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            environment,
            log_format,
        })
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Socket address the listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid HOST value {value:?}: {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("Invalid log format {0:?}, expected \"text\" or \"json\"")]
    InvalidLogFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::resolve(|name| env.get(name).cloned())
    }

    #[test]
    fn test_resolve_defaults_when_unset() {
        let config = resolve_with(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 9001);
        assert_eq!(config.environment, "development");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9001");
    }

    #[test]
    fn test_resolve_port_from_env() {
        let config = resolve_with(&[("PORT", "3000")]).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_resolve_port_zero() {
        // Port 0 is passed through so the OS can pick a free port
        let config = resolve_with(&[("PORT", "0")]).unwrap();
        assert_eq!(config.port, 0);
    }

    #[test]
    fn test_resolve_empty_port_uses_default() {
        let config = resolve_with(&[("PORT", "")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_resolve_invalid_port() {
        let err = resolve_with(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "http"));

        let err = resolve_with(&[("PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_resolve_environment_label() {
        let config = resolve_with(&[("NODE_ENV", "production")]).unwrap();
        assert_eq!(config.environment, "production");

        let config = resolve_with(&[("NODE_ENV", "  ")]).unwrap();
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
    }

    #[test]
    fn test_resolve_host() {
        let config = resolve_with(&[("HOST", "127.0.0.1"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");

        let err = resolve_with(&[("HOST", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }

    #[test]
    fn test_resolve_log_format() {
        let config = resolve_with(&[("LOG_FORMAT", "JSON")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        let err = resolve_with(&[("LOG_FORMAT", "yaml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }

    #[test]
    fn test_resolve_ignores_unrelated_vars() {
        let config = resolve_with(&[("PATH", "/usr/bin"), ("RUST_LOG", "debug")]).unwrap();
        assert_eq!(config, Config::default());
    }
}
