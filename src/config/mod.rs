//! Configuration handling for the service.
//!
//! Everything comes from environment variables with development defaults;
//! `Config::from_env` validates each value so a bad deployment fails at
//! startup instead of on the first request.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

use crate::summarizer::DEFAULT_MAX_LENGTH;
use crate::transcript::client::DEFAULT_TIMEOUT;

/// Environment variable names.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_TRANSCRIPT_TIMEOUT_SECS: &str = "TRANSCRIPT_TIMEOUT_SECS";
pub const ENV_DEFAULT_MAX_LENGTH: &str = "DEFAULT_MAX_LENGTH";
pub const ENV_DEFAULT_LANGUAGE: &str = "DEFAULT_LANGUAGE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_LANGUAGE: &str = "en";

/// Service runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: SocketAddr,
    transcript_timeout: Duration,
    default_max_length: i64,
    default_language: String,
}

impl Config {
    pub fn new(
        bind_addr: SocketAddr,
        transcript_timeout: Duration,
        default_max_length: i64,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr,
            transcript_timeout,
            default_max_length,
            default_language: default_language.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = read_var(ENV_BIND_ADDR, DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid(ENV_BIND_ADDR, e))?;

        let transcript_timeout = match env::var(ENV_TRANSCRIPT_TIMEOUT_SECS) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::invalid(
                        ENV_TRANSCRIPT_TIMEOUT_SECS,
                        "must be greater than zero",
                    ));
                }
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => return Err(ConfigError::invalid(ENV_TRANSCRIPT_TIMEOUT_SECS, e)),
            },
            Err(_) => DEFAULT_TIMEOUT,
        };

        let default_max_length = match env::var(ENV_DEFAULT_MAX_LENGTH) {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| ConfigError::invalid(ENV_DEFAULT_MAX_LENGTH, e))?,
            Err(_) => DEFAULT_MAX_LENGTH,
        };

        let default_language = read_var(ENV_DEFAULT_LANGUAGE, DEFAULT_LANGUAGE)
            .trim()
            .to_string();
        if default_language.is_empty() {
            return Err(ConfigError::invalid(ENV_DEFAULT_LANGUAGE, "must not be empty"));
        }

        Ok(Self {
            bind_addr,
            transcript_timeout,
            default_max_length,
            default_language,
        })
    }

    /// TCP bind address for the HTTP server.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
    /// Upper bound for fetching one transcript.
    pub fn transcript_timeout(&self) -> Duration {
        self.transcript_timeout
    }
    pub fn default_max_length(&self) -> i64 {
        self.default_max_length
    }
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

impl Default for Config {
    /// Development defaults (mirrors `from_env` with no env overrides).
    fn default() -> Self {
        Self::new(
            SocketAddr::from(([127, 0, 0, 1], 5000)),
            DEFAULT_TIMEOUT,
            DEFAULT_MAX_LENGTH,
            DEFAULT_LANGUAGE,
        )
    }
}

fn read_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Display) -> Self {
        ConfigError::InvalidValue {
            field,
            reason: reason.to_string(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
