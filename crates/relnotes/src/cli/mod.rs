//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use relnotes_core::{load_config_or_default, RunContext};

use commands::{ExtractCommand, UpdateCommand};

/// relnotes - release notes and changelog promotion for CI pipelines
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tagged human-readable lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the [Unreleased] changelog section as release notes
    Extract(ExtractCommand),

    /// Promote the [Unreleased] section to a new dated version
    Update(UpdateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Extract(ref cmd) => cmd.execute(&self),
            Commands::Update(ref cmd) => cmd.execute(&self),
        }
    }

    /// Whether tagged progress lines should be printed
    pub fn reports(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

/// Build the run context for the current directory, applying path overrides
pub fn run_context(cwd: &Path, changelog: Option<&Path>) -> RunContext {
    let (config, _) = load_config_or_default(cwd);
    let mut ctx = RunContext::from_config(&config);
    if let Some(path) = changelog {
        ctx = ctx.with_changelog_path(path);
    }
    ctx.rooted_at(cwd)
}
