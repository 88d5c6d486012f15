// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `nanoshell`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "nanoshell",
    version,
    about = "A minimal line-oriented command shell.",
    long_about = None
)]
pub struct CliArgs {
    /// Terminate after executing this many commands (must be >= 1).
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub max: Option<i64>,

    /// Read commands from this file instead of stdin.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Write a `signal.txt` helper with ready-to-use `kill` commands.
    #[arg(short, long)]
    pub signalfile: bool,

    /// Optional TOML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `NANOSHELL_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
