//! GitHub Actions output channel
//!
//! Values are appended to the file named by `GITHUB_OUTPUT` as multi-line
//! records:
//!
//! ```text
//! release-notes<<EOF
//! <value>
//! EOF
//! ```
//!
//! A value containing a line equal to the delimiter ends the record early.

use std::io::Write;
use std::path::{Path, PathBuf};

use relnotes_core::{ChangelogError, Result};
use tracing::{debug, instrument};

/// Environment variable naming the output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Heredoc delimiter for multi-line values
pub const DELIMITER: &str = "EOF";

/// Append-only key/value file read back by the CI runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    /// Use the given output file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a multi-line `key<<EOF` record, creating the file if needed
    #[instrument(skip_all, fields(path = %self.path.display(), key = %key))]
    pub fn append(&self, key: &str, value: &str) -> Result<()> {
        let record = format_record(key, value);
        let map_err = |source| ChangelogError::OutputChannel {
            path: self.path.clone(),
            source,
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(map_err)?;
        file.write_all(record.as_bytes()).map_err(map_err)?;

        debug!(bytes = record.len(), "output record appended");
        Ok(())
    }
}

/// Render one heredoc record
pub fn format_record(key: &str, value: &str) -> String {
    format!("{key}<<{DELIMITER}\n{value}\n{DELIMITER}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_core::RelnotesError;
    use tempfile::TempDir;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record("release-notes", "line 1\nline 2"),
            "release-notes<<EOF\nline 1\nline 2\nEOF\n"
        );
    }

    #[test]
    fn test_append_preserves_existing_records() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("github_output");
        std::fs::write(&path, "version=1.2.0\n").unwrap();

        let output = GithubOutput::new(&path);
        output.append("release-notes", "- Fixed bug X").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "version=1.2.0\nrelease-notes<<EOF\n- Fixed bug X\nEOF\n"
        );
    }

    #[test]
    fn test_append_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out");

        GithubOutput::new(&path).append("k", "v").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "k<<EOF\nv\nEOF\n");
    }

    #[test]
    fn test_append_failure() {
        let temp = TempDir::new().unwrap();
        let output = GithubOutput::new(temp.path().join("no-such-dir").join("out"));

        let result = output.append("k", "v");
        assert!(matches!(
            result,
            Err(RelnotesError::Changelog(ChangelogError::OutputChannel { .. }))
        ));
    }
}
