//! CLI commands

mod extract;
mod update;

pub use extract::ExtractCommand;
pub use update::UpdateCommand;
