//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_CHANGELOG_FILE, DEFAULT_FALLBACK_NOTES, DEFAULT_OUTPUT_KEY, DEFAULT_RELEASE_NOTES_FILE,
};

/// Main configuration for relnotes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,

    /// Release notes configuration
    pub release_notes: ReleaseNotesConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

/// Release notes configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseNotesConfig {
    /// File the extracted notes are written to
    pub output: PathBuf,

    /// Text used when there is nothing unreleased
    pub fallback: String,

    /// Key used in the CI output channel
    pub output_key: String,
}

impl Default for ReleaseNotesConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_RELEASE_NOTES_FILE),
            fallback: DEFAULT_FALLBACK_NOTES.to_string(),
            output_key: DEFAULT_OUTPUT_KEY.to_string(),
        }
    }
}
