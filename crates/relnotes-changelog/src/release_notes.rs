//! Release notes extraction from the unreleased section

use std::path::Path;

use relnotes_core::{ChangelogError, Result};
use tracing::{debug, info, instrument};

use crate::parser::parse_unreleased_section;
use crate::types::Extraction;

/// Classify the unreleased section of a changelog text
pub fn extract_from_str(text: &str) -> Extraction {
    match parse_unreleased_section(text) {
        Some(section) if !section.body.is_empty() => Extraction::Found(section.body.to_string()),
        Some(_) => Extraction::Empty,
        None => Extraction::NotFound,
    }
}

/// Read a changelog and extract its unreleased section
#[instrument(skip_all, fields(path = %path.display()))]
pub fn extract_unreleased(path: &Path) -> Result<Extraction> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ChangelogError::from_read(path, e))?;

    let extraction = extract_from_str(&content);
    info!(status = extraction.status(), "unreleased section examined");
    Ok(extraction)
}

/// Write release notes, replacing any previous file content
#[instrument(skip_all, fields(path = %path.display(), len = content.len()))]
pub fn write_release_notes(content: &str, path: &Path) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("release notes written");
    Ok(())
}
