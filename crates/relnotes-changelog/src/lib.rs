//! relnotes Changelog - Keep a Changelog handling for release pipelines
//!
//! This crate extracts the `[Unreleased]` section of a changelog as release
//! notes and promotes it to a dated version section after a release.

pub mod github_output;
pub mod parser;
pub mod release_notes;
pub mod types;
pub mod updater;

pub use github_output::GithubOutput;
pub use parser::{parse_unreleased_section, ChangelogDocument, UnreleasedSection};
pub use release_notes::{extract_from_str, extract_unreleased, write_release_notes};
pub use types::{Extraction, Rendered, Section, SectionKind, UpdateStrategy};
pub use updater::{normalize_version, render_changelog, render_updated_document, update_changelog};
