//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_release_notes(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "path cannot be empty"));
    }

    Ok(())
}

fn validate_release_notes(config: &Config) -> Result<()> {
    let notes = &config.release_notes;

    if notes.output.as_os_str().is_empty() {
        return Err(invalid("release_notes.output", "path cannot be empty"));
    }

    if notes.fallback.trim().is_empty() {
        return Err(invalid("release_notes.fallback", "fallback text cannot be empty"));
    }

    // The key is the left side of a `key<<EOF` record.
    if notes.output_key.is_empty()
        || notes
            .output_key
            .chars()
            .any(|c| c.is_whitespace() || c == '<' || c == '=')
    {
        return Err(invalid(
            "release_notes.output_key",
            "must be non-empty and contain no whitespace, '<' or '='",
        ));
    }

    Ok(())
}

fn invalid(field: &str, message: &str) -> crate::RelnotesError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
