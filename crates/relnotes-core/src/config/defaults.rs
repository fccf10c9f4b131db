//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relnotes.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relnotes.yaml";

/// Default changelog file
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default release notes output file
pub const DEFAULT_RELEASE_NOTES_FILE: &str = "release_notes.txt";

/// Release notes used when the changelog has nothing unreleased
pub const DEFAULT_FALLBACK_NOTES: &str = "This release includes various improvements and bug fixes.";

/// Key written to the CI output channel
pub const DEFAULT_OUTPUT_KEY: &str = "release-notes";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relnotes.toml",
        ".relnotes.yaml",
    ]
}
