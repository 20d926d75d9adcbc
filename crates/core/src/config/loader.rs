use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::env::{self, VarError};
use std::path::Path;

use super::{
    types::{RawSettings, Settings},
    validate_settings, ConfigError,
};

/// Environment variables read by the settings loaders.
pub const SETTINGS_ENV_KEYS: [&str; 5] = [
    "API_BASE_URL",
    "API_KEY",
    "API_TIMEOUT",
    "MAX_RESULTS",
    "MIN_CONFIDENCE",
];

const API_KEY_ENV: &str = "API_KEY";

/// Merge the environment over `figment`.
///
/// `Env` parses values, so a key like `0123456789` would come back as a
/// number. The API key is read as plain text instead.
fn merge_env(figment: Figment) -> Result<Figment, ConfigError> {
    let parsed_keys: Vec<&str> = SETTINGS_ENV_KEYS
        .iter()
        .copied()
        .filter(|key| *key != API_KEY_ENV)
        .collect();
    let figment = figment.merge(Env::raw().only(&parsed_keys));

    match env::var(API_KEY_ENV) {
        Ok(api_key) => Ok(figment.merge(Serialized::default("api_key", api_key))),
        Err(VarError::NotPresent) => Ok(figment),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::ParseError(format!(
            "{} is not valid unicode",
            API_KEY_ENV
        ))),
    }
}

/// Load settings from environment variables
pub fn load_settings() -> Result<Settings, ConfigError> {
    extract(merge_env(Figment::new())?)
}

/// Load settings from a TOML file with environment variable overrides
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(merge_env(Figment::new().merge(Toml::file(path)))?)
}

/// Load settings from TOML string (useful for testing)
pub fn load_settings_from_str(toml_str: &str) -> Result<Settings, ConfigError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    finish(raw)
}

fn extract(figment: Figment) -> Result<Settings, ConfigError> {
    let raw: RawSettings = figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    finish(raw)
}

fn finish(raw: RawSettings) -> Result<Settings, ConfigError> {
    let settings = Settings::try_from(raw)?;
    validate_settings(&settings)?;
    Ok(settings)
}
