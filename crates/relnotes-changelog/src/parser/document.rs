//! Whole-document view of a changelog

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::scan_headers;
use crate::types::{Section, SectionKind};

/// A changelog split into its preamble and sections
///
/// Writing the document back with [`fmt::Display`] reproduces the input
/// byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogDocument {
    /// Text before the first header (title, intro)
    pub preamble: String,
    /// Sections in document order
    pub sections: Vec<Section>,
}

impl ChangelogDocument {
    /// Parse a changelog
    pub fn parse(text: &str) -> Self {
        let headers = scan_headers(text);
        let preamble_end = headers.first().map_or(text.len(), |h| h.span.start);

        let sections: Vec<Section> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let end = headers.get(i + 1).map_or(text.len(), |h| h.span.start);
                Section {
                    kind: header.kind.clone(),
                    header: text[header.span.clone()].to_string(),
                    body: text[header.span.end..end].to_string(),
                }
            })
            .collect();

        let document = Self {
            preamble: text[..preamble_end].to_string(),
            sections,
        };

        let unreleased = document.unreleased_count();
        if unreleased > 1 {
            warn!(count = unreleased, "changelog has more than one [Unreleased] section; only the first is used");
        }
        debug!(sections = document.sections.len(), "changelog parsed");

        document
    }

    /// The first unreleased section
    pub fn unreleased(&self) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind.is_unreleased())
    }

    /// Number of unreleased sections
    pub fn unreleased_count(&self) -> usize {
        self.sections.iter().filter(|s| s.kind.is_unreleased()).count()
    }

    /// Version sections in document order
    pub fn versions(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| !s.kind.is_unreleased())
    }

    /// Version label of the first version section
    pub fn latest_version(&self) -> Option<&str> {
        self.versions().find_map(|s| match &s.kind {
            SectionKind::Version { version, .. } => Some(version.as_str()),
            SectionKind::Unreleased => None,
        })
    }

    /// Check if a version already has a section
    pub fn has_version(&self, version: &str) -> bool {
        self.versions().any(|s| match &s.kind {
            SectionKind::Version { version: v, .. } => v == version,
            SectionKind::Unreleased => false,
        })
    }
}

impl fmt::Display for ChangelogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preamble)?;
        for section in &self.sections {
            f.write_str(&section.header)?;
            f.write_str(&section.body)?;
        }
        Ok(())
    }
}
