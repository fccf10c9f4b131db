//! Promotion of the unreleased section to a dated version

use std::path::Path;

use relnotes_core::{ChangelogError, Result};
use tracing::{debug, info, instrument, warn};

use crate::parser::{first_header_offset, parse_unreleased_section, ChangelogDocument};
use crate::types::{Rendered, UpdateStrategy, UNRELEASED_LABEL};

/// Strip a single leading `v` from a version string
///
/// No other validation is done; anything else is used verbatim.
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Header line for a released version
pub fn version_header(version: &str, date: &str) -> String {
    format!("## [{}] - {}", version, date)
}

/// Rewrite a changelog so the unreleased changes belong to `version`
///
/// Only the first `## [Unreleased]` section is touched. Without one, a fresh
/// unreleased header and the version header are inserted above the first
/// version header, or appended when the document has no headers at all.
pub fn render_updated_document(text: &str, version: &str, date: &str) -> Rendered {
    let block = format!(
        "## [{}]\n\n{}\n\n",
        UNRELEASED_LABEL,
        version_header(version, date)
    );

    if let Some(section) = parse_unreleased_section(text) {
        let had_content = !section.body.is_empty();
        let mut replacement = block;
        if had_content {
            replacement.push_str(section.body);
            replacement.push_str("\n\n");
        }
        if !section.followed_by_header {
            replacement.truncate(replacement.trim_end().len());
            replacement.push('\n');
        }

        let mut output = String::with_capacity(text.len() + replacement.len());
        output.push_str(&text[..section.span.start]);
        output.push_str(&replacement);
        output.push_str(&text[section.span.end..]);

        return Rendered {
            text: output,
            strategy: UpdateStrategy::Promoted { had_content },
        };
    }

    if let Some(offset) = first_header_offset(text) {
        let mut output = String::with_capacity(text.len() + block.len());
        output.push_str(&text[..offset]);
        output.push_str(&block);
        output.push_str(&text[offset..]);

        return Rendered {
            text: output,
            strategy: UpdateStrategy::Inserted,
        };
    }

    let mut output = text.trim_end().to_string();
    if !output.is_empty() {
        output.push_str("\n\n");
    }
    output.push_str(block.trim_end());
    output.push('\n');

    Rendered {
        text: output,
        strategy: UpdateStrategy::Appended,
    }
}

/// Read a changelog and compute its updated text without writing it
#[instrument(skip_all, fields(path = %path.display(), version = %normalize_version(version)))]
pub fn render_changelog(version: &str, path: &Path, date: &str) -> Result<Rendered> {
    let version = normalize_version(version);
    let content =
        std::fs::read_to_string(path).map_err(|e| ChangelogError::from_read(path, e))?;

    let document = ChangelogDocument::parse(&content);
    if document.has_version(version) {
        warn!(version, "changelog already has a section for this version");
    }
    debug!(latest = ?document.latest_version(), "current changelog state");

    let rendered = render_updated_document(&content, version, date);
    info!(strategy = ?rendered.strategy, "changelog rendered");
    Ok(rendered)
}

/// Promote the unreleased section of the changelog at `path` to `version`
///
/// The whole file is rewritten.
pub fn update_changelog(version: &str, path: &Path, date: &str) -> Result<Rendered> {
    let rendered = render_changelog(version, path, date)?;

    std::fs::write(path, &rendered.text).map_err(|source| ChangelogError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "changelog written");

    Ok(rendered)
}
