use std::env;

use crate::error::ConfigError;

/// Environment variable the API key is read from.
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Transport-level request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings a [`WeatherApi`](crate::WeatherApi) is built from.
///
/// `base_url` is overridable so tests can point the client at a local mock
/// server; everything else defaults to the production values.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    /// Applied to the underlying HTTP client at construction. There is no
    /// per-request timeout beyond it.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Production defaults with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read the key from [`API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` when the variable is unset or
    /// blank. Callers treat this as fatal at startup; there is no other key
    /// source.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(API_KEY_VAR)
    }

    fn from_env_var(var: &str) -> Result<Self, ConfigError> {
        match env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    /// Replace the API root, keeping everything else.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
