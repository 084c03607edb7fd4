//! Command-line surface: route argument parsing and subcommands.

pub mod commands;
