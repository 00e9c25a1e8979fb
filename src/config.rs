//! Configuration types for cnpj-lookup

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable that overrides the default base URL
pub const BASE_URL_ENV: &str = "CNPJ_API_BASE_URL";

/// Client configuration
///
/// All fields have sensible defaults, so `Config::default()` works out of
/// the box against a locally running lookup service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the lookup service (default: "http://localhost:5555")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout applied to every HTTP call (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_secs")]
    pub request_timeout: Duration,

    /// Maximum number of CNPJs accepted in one batch search (default: 10)
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_request_timeout(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl Config {
    /// Build a configuration with environment overrides applied
    ///
    /// Reads [`BASE_URL_ENV`] and, when set to a non-empty value, uses it in
    /// place of the default base URL. All other fields keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV)
            && !base_url.trim().is_empty()
        {
            config.base_url = base_url;
        }
        config
    }

    /// Resolve an endpoint path against the configured base URL
    ///
    /// Fails with a [`Error::Config`] when the base URL cannot be parsed,
    /// so a bad configuration surfaces before any request is sent.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })?;
        base.join(path).map_err(|e| Error::Config {
            message: format!("cannot resolve endpoint '{}': {}", path, e),
            key: Some("base_url".to_string()),
        })
    }
}

fn default_base_url() -> String {
    "http://localhost:5555".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_batch_size() -> usize {
    10
}

// Serialize the timeout as whole seconds so config files stay readable.
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_secs(u64::deserialize(d)?))
    }
}
