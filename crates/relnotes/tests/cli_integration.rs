//! CLI integration tests for relnotes
//!
//! Each test runs the binary inside a fresh temporary directory with the CI
//! environment variables cleared.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FALLBACK: &str = "This release includes various improvements and bug fixes.";

const CHANGELOG: &str = "# Changelog\n\n## [Unreleased]\n\n### Fixed\n\n- Fixed bug X\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n";

/// Get a command instance for the relnotes binary, isolated in `dir`
fn relnotes_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("relnotes"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("VERSION")
        .env_remove("RUST_LOG");
    cmd
}

fn setup(changelog: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), changelog).unwrap();
    dir
}

// =============================================================================
// Extract
// =============================================================================

#[test]
fn test_extract_writes_unreleased_notes() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .arg("extract")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: Found unreleased content in changelog"))
        .stdout(predicate::str::contains("RELEASE NOTES CONTENT:"));

    let notes = fs::read_to_string(dir.path().join("release_notes.txt")).unwrap();
    assert_eq!(notes, "### Fixed\n\n- Fixed bug X");
}

#[test]
fn test_extract_empty_section_uses_fallback() {
    let dir = setup("## [Unreleased]\n\n## [1.0.0] - 2024-01-01\n");

    relnotes_cmd(dir.path())
        .arg("extract")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: Unreleased section is empty"));

    let notes = fs::read_to_string(dir.path().join("release_notes.txt")).unwrap();
    assert_eq!(notes, FALLBACK);
}

#[test]
fn test_extract_without_unreleased_uses_fallback() {
    let dir = setup("# Changelog\n\n## [1.0.0] - 2024-01-01\n");

    relnotes_cmd(dir.path())
        .arg("extract")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: No unreleased section found"));

    let notes = fs::read_to_string(dir.path().join("release_notes.txt")).unwrap();
    assert_eq!(notes, FALLBACK);
}

#[test]
fn test_extract_missing_changelog_falls_back() {
    let dir = TempDir::new().unwrap();

    relnotes_cmd(dir.path())
        .arg("extract")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: Changelog file not found"));

    let notes = fs::read_to_string(dir.path().join("release_notes.txt")).unwrap();
    assert_eq!(notes, FALLBACK);
}

#[test]
fn test_extract_appends_github_output() {
    let dir = setup(CHANGELOG);
    let github_output = dir.path().join("github_output");
    fs::write(&github_output, "previous=1\n").unwrap();

    relnotes_cmd(dir.path())
        .arg("extract")
        .env("GITHUB_OUTPUT", &github_output)
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: GitHub Actions output set successfully"));

    assert_eq!(
        fs::read_to_string(&github_output).unwrap(),
        "previous=1\nrelease-notes<<EOF\n### Fixed\n\n- Fixed bug X\nEOF\n"
    );
}

#[test]
fn test_extract_github_output_failure_exits_nonzero() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .arg("extract")
        .env("GITHUB_OUTPUT", dir.path().join("missing").join("out"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Error setting GitHub Actions output"));

    // Notes are written before the CI output step.
    assert!(dir.path().join("release_notes.txt").exists());
}

#[test]
fn test_extract_write_failure_exits_nonzero() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .args(["extract", "--output", "missing/notes.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Error writing"));
}

#[test]
fn test_extract_uses_config_file() {
    let dir = setup("");
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(
        dir.path().join("docs/CHANGES.md"),
        "## [Unreleased]\n\n- From docs\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("relnotes.toml"),
        "[changelog]\nfile = \"docs/CHANGES.md\"\n\n[release_notes]\noutput = \"notes.md\"\n",
    )
    .unwrap();

    relnotes_cmd(dir.path()).arg("extract").assert().success();

    let notes = fs::read_to_string(dir.path().join("notes.md")).unwrap();
    assert_eq!(notes, "- From docs");
}

#[test]
fn test_extract_json_report() {
    let dir = setup(CHANGELOG);

    let assert = relnotes_cmd(dir.path())
        .args(["extract", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["status"], "found");
    assert_eq!(report["content"], "### Fixed\n\n- Fixed bug X");
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_promotes_unreleased() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .args(["update", "v2.0.0", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating changelog for version: 2.0.0"))
        .stdout(predicate::str::contains("SUCCESS: Updated changelog for version 2.0.0"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        "# Changelog\n\n## [Unreleased]\n\n## [2.0.0] - 2025-06-01\n\n### Fixed\n\n- Fixed bug X\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n"
    );
}

#[test]
fn test_update_reads_version_from_env() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .args(["update", "--date", "2025-06-01"])
        .env("VERSION", "3.1.0")
        .assert()
        .success();

    let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
    assert!(changelog.contains("## [3.1.0] - 2025-06-01"));
}

#[test]
fn test_update_without_version_fails() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .arg("update")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Version not provided"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        CHANGELOG
    );
}

#[test]
fn test_update_missing_changelog_fails() {
    let dir = TempDir::new().unwrap();

    relnotes_cmd(dir.path())
        .args(["update", "1.0.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Error updating changelog"));
}

#[test]
fn test_update_inserts_when_unreleased_missing() {
    let dir = setup("# Changelog\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n");

    relnotes_cmd(dir.path())
        .args(["update", "1.1.0", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING: No unreleased section found"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        "# Changelog\n\n## [Unreleased]\n\n## [1.1.0] - 2025-06-01\n\n## [1.0.0] - 2024-01-01\n\n- Initial release\n"
    );
}

#[test]
fn test_update_dry_run_leaves_file() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .args(["update", "2.0.0", "--date", "2025-06-01", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## [2.0.0] - 2025-06-01"));

    assert_eq!(
        fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap(),
        CHANGELOG
    );
}

#[test]
fn test_update_rejects_bad_date() {
    let dir = setup(CHANGELOG);

    relnotes_cmd(dir.path())
        .args(["update", "2.0.0", "--date", "June 1st"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Invalid release date"));
}
