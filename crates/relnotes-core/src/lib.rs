//! relnotes Core - shared foundations for the relnotes release helpers
//!
//! This crate provides error handling, configuration loading and the
//! resolved run context consumed by the changelog operations.

pub mod config;
pub mod context;
pub mod error;

pub use config::{load_config_or_default, Config};
pub use context::RunContext;
pub use error::{ChangelogError, ConfigError, RelnotesError, Result};
