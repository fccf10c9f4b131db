//! Resolved inputs for a single run
//!
//! Everything ambient (environment variables, the current date, config file
//! values, CLI overrides) is folded into a [`RunContext`] once at startup so
//! the changelog operations never consult the process environment directly.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Config;
use crate::error::{RelnotesError, Result};

/// Format used for release dates in version headers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolved paths, date and texts for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Changelog to read (and rewrite, for updates)
    pub changelog_path: PathBuf,
    /// Release notes output file
    pub output_path: PathBuf,
    /// CI output channel file, when running under CI
    pub ci_output_path: Option<PathBuf>,
    /// Date stamped on new version headers
    pub today: NaiveDate,
    /// Notes used when nothing is unreleased
    pub fallback_notes: String,
    /// Key for the CI output record
    pub output_key: String,
}

impl RunContext {
    /// Build a context from configuration, dated today in local time
    pub fn from_config(config: &Config) -> Self {
        Self {
            changelog_path: config.changelog.file.clone(),
            output_path: config.release_notes.output.clone(),
            ci_output_path: None,
            today: Local::now().date_naive(),
            fallback_notes: config.release_notes.fallback.clone(),
            output_key: config.release_notes.output_key.clone(),
        }
    }

    /// Resolve relative paths against a base directory
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.changelog_path = base.join(&self.changelog_path);
        self.output_path = base.join(&self.output_path);
        debug!(
            changelog = %self.changelog_path.display(),
            output = %self.output_path.display(),
            "resolved run paths"
        );
        self
    }

    /// Override the changelog path
    pub fn with_changelog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog_path = path.into();
        self
    }

    /// Override the release notes output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the CI output channel; empty values are treated as unset
    pub fn with_ci_output(mut self, path: Option<PathBuf>) -> Self {
        self.ci_output_path = path.filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Override the release date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Release date formatted for a version header
    pub fn today_string(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| RelnotesError::InvalidDate(value.to_string()))
}
