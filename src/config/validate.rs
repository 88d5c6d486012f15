// src/config/validate.rs

use crate::config::model::{RawConfigFile, RawShellSection, ShellConfig};
use crate::errors::{Result, ShellError};

impl TryFrom<RawConfigFile> for ShellConfig {
    type Error = ShellError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        ShellConfig::try_from(raw.shell)
    }
}

impl TryFrom<RawShellSection> for ShellConfig {
    type Error = ShellError;

    fn try_from(raw: RawShellSection) -> std::result::Result<Self, Self::Error> {
        let defaults = ShellConfig::default();

        let max_commands = match raw.max_commands {
            Some(n) => validate_max_commands(n)?,
            None => defaults.max_commands,
        };

        let stats_prefix = raw.stats_prefix.unwrap_or(defaults.stats_prefix);
        validate_stats_prefix(&stats_prefix)?;

        Ok(ShellConfig {
            prompt: raw.prompt.unwrap_or(defaults.prompt),
            max_commands,
            batch_file: None,
            signal_file: raw.signal_file.unwrap_or(defaults.signal_file),
            stats_prefix,
            stats_dir: raw.stats_dir.unwrap_or(defaults.stats_dir),
        })
    }
}

/// A command limit must be a positive integer.
pub fn validate_max_commands(n: i64) -> Result<u64> {
    u64::try_from(n)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(ShellError::InvalidThreshold(n))
}

fn validate_stats_prefix(prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(ShellError::ConfigFailure(
            "[shell].stats_prefix must not be empty".to_string(),
        ));
    }
    if prefix.contains(std::path::MAIN_SEPARATOR) || prefix.contains('/') {
        return Err(ShellError::ConfigFailure(format!(
            "[shell].stats_prefix must be a file name, not a path (got '{prefix}')"
        )));
    }
    Ok(())
}
