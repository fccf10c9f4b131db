//! Extract command

use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use relnotes_changelog::{extract_unreleased, write_release_notes, Extraction, GithubOutput};
use relnotes_core::{ChangelogError, RelnotesError, RunContext};

use crate::cli::{output, run_context, Cli, OutputFormat};

/// Extract the [Unreleased] changelog section as release notes
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Changelog to read (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// File to write the release notes to
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// CI output file to append a `release-notes` record to
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub github_output: Option<PathBuf>,
}

impl ExtractCommand {
    /// Execute the extract command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(changelog = ?self.changelog, output = ?self.output, "executing extract command");
        let cwd = std::env::current_dir()?;

        let mut ctx = run_context(&cwd, self.changelog.as_deref());
        if let Some(path) = &self.output {
            ctx = ctx.with_output_path(cwd.join(path));
        }
        let ctx = ctx.with_ci_output(self.github_output.clone());

        let (status, extraction) = self.read_notes(&ctx, cli);
        let notes = extraction
            .as_ref()
            .map_or(ctx.fallback_notes.as_str(), |e| e.content_or(&ctx.fallback_notes));

        write_release_notes(notes, &ctx.output_path)?;
        if cli.reports() {
            output::success(&format!(
                "Release notes written to {}",
                ctx.output_path.display()
            ));
            output::banner("RELEASE NOTES CONTENT:", notes);
        }

        if let Some(path) = &ctx.ci_output_path {
            GithubOutput::new(path).append(&ctx.output_key, notes)?;
            if cli.reports() {
                output::success("GitHub Actions output set successfully");
            }
        }

        if cli.format == OutputFormat::Json {
            let report = serde_json::json!({
                "status": status,
                "content": notes,
                "output": ctx.output_path,
                "github_output": ctx.ci_output_path,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Ok(())
    }

    /// Read the unreleased section, reporting problems without failing
    ///
    /// Returns the status label and the extraction, or `None` when the
    /// changelog could not be read.
    fn read_notes(&self, ctx: &RunContext, cli: &Cli) -> (&'static str, Option<Extraction>) {
        match extract_unreleased(&ctx.changelog_path) {
            Ok(extraction) => {
                if cli.reports() {
                    match &extraction {
                        Extraction::Found(_) => {
                            output::success("Found unreleased content in changelog")
                        }
                        Extraction::Empty => output::warning("Unreleased section is empty"),
                        Extraction::NotFound => {
                            output::warning("No unreleased section found in changelog")
                        }
                    }
                }
                (extraction.status(), Some(extraction))
            }
            Err(err) => {
                warn!(error = %err, "falling back to default release notes");
                if cli.format == OutputFormat::Text {
                    output::error(&err.to_string());
                }
                let status = match err {
                    RelnotesError::Changelog(ChangelogError::FileNotFound(_)) => "missing_file",
                    _ => "read_error",
                };
                (status, None)
            }
        }
    }
}
