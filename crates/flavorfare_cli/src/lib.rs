//! Command-line adapter over the restaurant service.
//!
//! # Responsibility
//! - Parse flags/env into settings and a single command.
//! - Translate commands into service calls and print JSON results.
//!
//! # Invariants
//! - `NotFound` exits with `EXIT_NOT_FOUND`; every other failure exits with 1.

pub mod commands;
pub mod config;

use clap::Parser;
use commands::Command;
use std::path::PathBuf;

/// Exit status reported when the target restaurant does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "flavorfare")]
#[command(about = "Manage FlavorFare restaurant records")]
#[command(version)]
pub struct Cli {
    /// SQLite database file (created on first use)
    #[arg(long, env = "FLAVORFARE_DB_PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "FLAVORFARE_LOG_LEVEL", global = true, value_parser = parse_log_level)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "FLAVORFARE_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

fn parse_log_level(raw: &str) -> Result<String, String> {
    flavorfare_core::normalize_level(raw).map(str::to_string)
}
