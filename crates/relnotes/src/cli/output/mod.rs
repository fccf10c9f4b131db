//! Output formatting utilities
//!
//! Every report line starts with a classification tag so CI logs can be
//! grepped. All of it goes to stdout.

use console::style;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("SUCCESS:").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    println!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", style("WARNING:").yellow().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("INFO:").blue(), message);
}

/// Print a block of text between banner rules
pub fn banner(title: &str, body: &str) {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("{}", style(title).bold());
    println!("{}", rule);
    println!("{}", body);
    println!("{}", rule);
}
