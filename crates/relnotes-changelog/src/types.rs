//! Changelog types

use serde::{Deserialize, Serialize};

/// Label of the section collecting not-yet-versioned changes
pub const UNRELEASED_LABEL: &str = "Unreleased";

/// What a `## [...]` header introduces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionKind {
    /// `## [Unreleased]`
    Unreleased,
    /// `## [<version>] - <date>`
    Version {
        /// Text inside the brackets
        version: String,
        /// Text after the ` - ` separator, if any
        date: Option<String>,
    },
}

impl SectionKind {
    /// Classify a header from its bracket label and the rest of its line
    pub fn from_header(label: &str, rest: &str) -> Self {
        if label == UNRELEASED_LABEL {
            return Self::Unreleased;
        }

        let date = rest
            .trim()
            .strip_prefix('-')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self::Version {
            version: label.to_string(),
            date,
        }
    }

    /// Check if this is the unreleased section
    pub fn is_unreleased(&self) -> bool {
        matches!(self, Self::Unreleased)
    }
}

/// A section of a changelog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section classification
    pub kind: SectionKind,
    /// Header line, without its line terminator
    pub header: String,
    /// Everything after the header line up to the next header, verbatim
    pub body: String,
}

impl Section {
    /// Body with surrounding whitespace removed
    pub fn content(&self) -> &str {
        self.body.trim()
    }

    /// Check if the section has no content
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

/// Result of looking for unreleased changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The section exists and has content (trimmed)
    Found(String),
    /// The section exists but is blank
    Empty,
    /// No `## [Unreleased]` header
    NotFound,
}

impl Extraction {
    /// The extracted content, if any
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Found(content) => Some(content),
            Self::Empty | Self::NotFound => None,
        }
    }

    /// Extracted content, or the given fallback
    pub fn content_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.content().unwrap_or(fallback)
    }

    /// Short machine-readable status
    pub fn status(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::Empty => "empty",
            Self::NotFound => "not_found",
        }
    }
}

/// How a new version section was placed into the changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStrategy {
    /// The unreleased section was promoted to the new version
    Promoted {
        /// Whether the unreleased section carried any content
        had_content: bool,
    },
    /// No unreleased section; a block was inserted above the first version
    Inserted,
    /// No headers at all; a block was appended to the document
    Appended,
}

/// A rewritten changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Full new document text
    pub text: String,
    /// Where the new version went
    pub strategy: UpdateStrategy,
}
