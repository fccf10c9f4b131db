//! Changelog parsing
//!
//! Headers are lines starting with `## [`. A section runs from its header to
//! the next header or the end of the text.

mod document;

pub use document::ChangelogDocument;

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::SectionKind;

/// Regex for `## [label] rest` header lines
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## \[(?P<label>[^\]\r\n]*)\](?P<rest>[^\r\n]*)").expect("Invalid regex")
});

/// A header line located in a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    /// Byte range of the header line, excluding the line terminator
    pub span: Range<usize>,
    /// Header classification
    pub kind: SectionKind,
}

/// Find every `## [` header line in document order
pub fn scan_headers(text: &str) -> Vec<HeaderLine> {
    HEADER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.name("label")?.as_str();
            let rest = caps.name("rest").map_or("", |m| m.as_str());
            Some(HeaderLine {
                span: whole.range(),
                kind: SectionKind::from_header(label, rest),
            })
        })
        .collect()
}

/// Start offset of the first header line, if any
pub fn first_header_offset(text: &str) -> Option<usize> {
    HEADER_REGEX.find(text).map(|m| m.start())
}

/// The first `## [Unreleased]` section of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreleasedSection<'a> {
    /// Byte range of the header line
    pub header: Range<usize>,
    /// Byte range from the header to the next header or end of text
    pub span: Range<usize>,
    /// Section body with surrounding whitespace trimmed
    pub body: &'a str,
    /// Whether another header follows the section
    pub followed_by_header: bool,
}

/// Locate the first unreleased section and its body
pub fn parse_unreleased_section(text: &str) -> Option<UnreleasedSection<'_>> {
    let headers = scan_headers(text);
    let index = headers.iter().position(|h| h.kind.is_unreleased())?;
    let header = &headers[index];
    let next = headers.get(index + 1).map(|h| h.span.start);
    let end = next.unwrap_or(text.len());

    Some(UnreleasedSection {
        header: header.span.clone(),
        span: header.span.start..end,
        body: text[header.span.end..end].trim(),
        followed_by_header: next.is_some(),
    })
}
