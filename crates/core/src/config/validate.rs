use super::{types::Settings, ConfigError};

/// Validate settings
/// Currently validates:
/// - API key is present (enforced by `Settings` construction)
/// - Base URL is not empty
/// - Timeout and max results are positive
/// - Min confidence is within [0, 1]
pub fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if settings.base_url().trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api_base_url cannot be empty".to_string(),
        ));
    }

    if settings.timeout_secs() == 0 {
        return Err(ConfigError::ValidationError(
            "api_timeout must be a positive number of seconds".to_string(),
        ));
    }

    if settings.max_results() == 0 {
        return Err(ConfigError::ValidationError(
            "max_results must be positive".to_string(),
        ));
    }

    if !(0.0..=1.0).contains(&settings.min_confidence()) {
        return Err(ConfigError::ValidationError(format!(
            "min_confidence must be within [0, 1], got {}",
            settings.min_confidence()
        )));
    }

    Ok(())
}
