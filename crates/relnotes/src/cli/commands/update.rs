//! Update command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use relnotes_changelog::{normalize_version, render_changelog, update_changelog, UpdateStrategy};
use relnotes_core::context::parse_date;
use relnotes_core::RelnotesError;

use crate::cli::{output, run_context, Cli, OutputFormat};

/// Promote the [Unreleased] section to a new dated version
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Version being released; a leading `v` is stripped
    #[arg(value_name = "VERSION", env = "VERSION")]
    pub release_version: Option<String>,

    /// Changelog to rewrite (defaults to the configured changelog file)
    #[arg(long, value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Release date to stamp instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Print the updated changelog without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateCommand {
    /// Execute the update command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(version = ?self.release_version, dry_run = self.dry_run, "executing update command");

        let raw_version = self
            .release_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(RelnotesError::MissingVersion)?;
        let version = normalize_version(raw_version);

        let cwd = std::env::current_dir()?;
        let mut ctx = run_context(&cwd, self.changelog.as_deref());
        if let Some(date) = &self.date {
            ctx = ctx.with_today(parse_date(date)?);
        }
        let date = ctx.today_string();

        if cli.reports() {
            output::info(&format!("Updating changelog for version: {}", version));
        }

        let rendered = if self.dry_run {
            render_changelog(raw_version, &ctx.changelog_path, &date)
        } else {
            update_changelog(raw_version, &ctx.changelog_path, &date)
        }
        .map_err(|e| anyhow::anyhow!("Error updating changelog: {}", e))?;

        if cli.format == OutputFormat::Json {
            let report = serde_json::json!({
                "version": version,
                "date": date,
                "changelog": ctx.changelog_path,
                "strategy": rendered.strategy,
                "written": !self.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if self.dry_run {
            print!("{}", rendered.text);
            return Ok(());
        }

        if cli.reports() {
            match rendered.strategy {
                UpdateStrategy::Promoted { had_content: false } => {
                    output::warning("Unreleased section was empty; added an empty version section")
                }
                UpdateStrategy::Inserted => output::warning(
                    "No unreleased section found; inserted one above the latest version",
                ),
                UpdateStrategy::Appended => output::warning(
                    "No version sections found; appended new sections to the changelog",
                ),
                UpdateStrategy::Promoted { had_content: true } => {}
            }
            output::success(&format!("Updated changelog for version {}", version));
        }

        Ok(())
    }
}
