//! Client configuration.
//!
//! The base URL is an explicit value handed to [`crate::HttpNotesApi`] at
//! startup. [`ClientConfig::from_env`] is a convenience for binaries.

use std::env;
use std::time::Duration;

use reqwest::Url;

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Request timeout used when nothing is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash, e.g. `http://localhost:5000`.
    pub api_base: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            log_level: "warn".to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration for the given base URL with default timeout and log level.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_base(api_base)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `NOTES_API_BASE`: backend base URL (default: http://localhost:5000)
    /// - `NOTES_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("NOTES_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let mut config = Self::new(&api_base)?;

        if let Some(raw) = lookup("NOTES_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "NOTES_TIMEOUT_SECS".to_string(),
                reason: format!("not a number of seconds: {raw}"),
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    name: "NOTES_TIMEOUT_SECS".to_string(),
                    reason: "must be at least 1 second".to_string(),
                });
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }

        Ok(config)
    }
}

/// Validate an http(s) base URL and drop trailing slashes.
fn normalize_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: "NOTES_API_BASE".to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("{raw}: scheme must be http or https")));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(format!("{raw}: must not carry a query or fragment")));
    }

    Ok(trimmed.to_string())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
