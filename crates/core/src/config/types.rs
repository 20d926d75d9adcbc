use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default Deep Research API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.research.com/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of results requested from the API.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Default minimum confidence forwarded to the API.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;

/// Settings as read from the environment or a TOML file, before the API key
/// check. Keys match the lower-cased environment variable names.
#[derive(Deserialize)]
pub(crate) struct RawSettings {
    #[serde(default = "default_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub api_timeout: u64,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

/// Immutable client settings.
///
/// A `Settings` value always carries a non-empty API key: the only ways to
/// obtain one are [`Settings::new`] and the loaders in this module, all of
/// which reject a missing key.
#[derive(Clone)]
pub struct Settings {
    base_url: String,
    api_key: String,
    timeout_secs: u64,
    max_results: u32,
    min_confidence: f64,
}

impl Settings {
    /// Create settings with the given API key and default values for
    /// everything else.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_results: DEFAULT_MAX_RESULTS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}

impl TryFrom<RawSettings> for Settings {
    type Error = ConfigError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let api_key = raw.api_key.ok_or(ConfigError::MissingApiKey)?;

        Ok(Settings::new(api_key)?
            .with_base_url(raw.api_base_url)
            .with_timeout_secs(raw.api_timeout)
            .with_max_results(raw.max_results)
            .with_min_confidence(raw.min_confidence))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .field("timeout_secs", &self.timeout_secs)
            .field("max_results", &self.max_results)
            .field("min_confidence", &self.min_confidence)
            .finish()
    }
}

/// Sanitized settings for logs and diagnostics (API key omitted).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SanitizedSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_results: u32,
    pub min_confidence: f64,
}

impl From<&Settings> for SanitizedSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            timeout_secs: settings.timeout_secs,
            max_results: settings.max_results,
            min_confidence: settings.min_confidence,
        }
    }
}
