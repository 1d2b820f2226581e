//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Reject configuration values that can never produce a valid release
pub fn validate_config(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "changelog file cannot be empty").into());
    }
    if !config.release.name_template.contains("{version}") {
        return Err(invalid("release.name_template", "must contain {version} placeholder").into());
    }
    if config.release.notes_file.as_os_str().is_empty() {
        return Err(invalid("release.notes_file", "notes file cannot be empty").into());
    }
    validate_api_url(&config.github.api_url)?;

    debug!("configuration validation passed");
    Ok(())
}

/// Check that an API base URL uses an HTTP scheme
pub fn validate_api_url(api_url: &str) -> Result<()> {
    match api_url.split_once("://") {
        Some(("http" | "https", rest)) if !rest.is_empty() => Ok(()),
        _ => Err(invalid("github.api_url", "must start with http:// or https://").into()),
    }
}
