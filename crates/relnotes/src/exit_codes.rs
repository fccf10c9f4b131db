//! Exit codes for the CLI

#![allow(dead_code)]

/// Success
pub const SUCCESS: i32 = 0;

/// Any failure: missing input, unreadable or unwritable files
pub const ERROR: i32 = 1;
