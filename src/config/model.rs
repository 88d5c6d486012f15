// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_PROMPT: &str = "nanoShell$ ";
pub const DEFAULT_STATS_PREFIX: &str = "nanoShell_status";
pub const DEFAULT_STATS_DIR: &str = ".";

/// Configuration file as read from TOML.
///
/// ```toml
/// [shell]
/// prompt = "nanoShell$ "
/// max_commands = 10
/// stats_prefix = "nanoShell_status"
/// stats_dir = "/tmp"
/// signal_file = true
/// ```
///
/// Every key is optional; anything left out falls back to the command line
/// or to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub shell: RawShellSection,
}

/// `[shell]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawShellSection {
    #[serde(default)]
    pub prompt: Option<String>,

    /// Must be positive when present. Absent means unbounded.
    #[serde(default)]
    pub max_commands: Option<i64>,

    /// File name prefix of the statistics files written on `SIGUSR2`.
    #[serde(default)]
    pub stats_prefix: Option<String>,

    /// Directory the statistics files are written to.
    #[serde(default)]
    pub stats_dir: Option<PathBuf>,

    /// Write `signal.txt` at startup.
    #[serde(default)]
    pub signal_file: Option<bool>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    /// `0` means no limit.
    pub max_commands: u64,
    /// Read commands from this file instead of stdin.
    pub batch_file: Option<PathBuf>,
    pub signal_file: bool,
    pub stats_prefix: String,
    pub stats_dir: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            max_commands: 0,
            batch_file: None,
            signal_file: false,
            stats_prefix: DEFAULT_STATS_PREFIX.to_string(),
            stats_dir: PathBuf::from(DEFAULT_STATS_DIR),
        }
    }
}
