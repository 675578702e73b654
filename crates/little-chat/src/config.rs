use std::env;
use std::time::Duration;

use little_chat_core::{ChatBuilder, DEFAULT_REQUEST_TIMEOUT};
use little_chat_http_model::{HttpConfigBuilder, HttpProvider};

use crate::PlaceholderProvider;

const ENDPOINT_VAR: &str = "LITTLE_CHAT_ENDPOINT";
const API_KEY_VAR: &str = "LITTLE_CHAT_API_KEY";
const TIMEOUT_VAR: &str = "LITTLE_CHAT_TIMEOUT_SECS";

/// Errors found while reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The timeout is not a positive number of seconds.
    #[error(
        "LITTLE_CHAT_TIMEOUT_SECS must be a positive number of seconds, \
         got {0:?}"
    )]
    InvalidTimeout(String),
}

/// Settings for a chat session, read from the environment.
///
/// - `LITTLE_CHAT_ENDPOINT`: URL of the generation service. When unset,
///   replies come from [`PlaceholderProvider`].
/// - `LITTLE_CHAT_API_KEY`: optional bearer key for the service.
/// - `LITTLE_CHAT_TIMEOUT_SECS`: optional request timeout.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    endpoint: Option<String>,
    api_key: Option<String>,
    request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    #[inline]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let request_timeout = match get(TIMEOUT_VAR) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            endpoint: get(ENDPOINT_VAR),
            api_key: get(API_KEY_VAR),
            request_timeout,
        })
    }

    /// Returns the URL of the generation service, if one is configured.
    #[inline]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns the request timeout.
    #[inline]
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Creates a chat builder backed by the configured provider.
    pub fn chat_builder(&self) -> ChatBuilder {
        let builder = match &self.endpoint {
            Some(endpoint) => {
                let mut http_config =
                    HttpConfigBuilder::with_endpoint(endpoint);
                if let Some(api_key) = &self.api_key {
                    http_config = http_config.with_api_key(api_key);
                }
                ChatBuilder::with_model_provider(HttpProvider::new(
                    http_config.build(),
                ))
            }
            None => {
                debug!("no endpoint configured, using placeholder replies");
                ChatBuilder::with_model_provider(PlaceholderProvider::default())
            }
        };
        builder.with_request_timeout(self.request_timeout)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<deducted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
