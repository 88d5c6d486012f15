// src/config/loader.rs

use std::path::Path;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::model::{RawConfigFile, ShellConfig};
use crate::errors::Result;
use crate::fs::FileSystem;

/// Read and deserialize a configuration file.
///
/// This only performs TOML deserialization; values are checked when the
/// result is turned into a [`ShellConfig`].
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), "loaded config file");

    Ok(config)
}

/// Build the effective configuration.
///
/// Precedence: command-line flags, then the `--config` file (if any), then
/// the built-in defaults.
pub fn load_config(fs: &dyn FileSystem, args: &CliArgs) -> Result<ShellConfig> {
    let raw = match &args.config {
        Some(path) => load_from_path(fs, path)?,
        None => RawConfigFile::default(),
    };
    resolve(raw, args)
}

/// Overlay the command line on a raw config file and validate the result.
pub fn resolve(raw: RawConfigFile, args: &CliArgs) -> Result<ShellConfig> {
    let mut shell = raw.shell;

    if let Some(max) = args.max {
        shell.max_commands = Some(max);
    }
    if args.signalfile {
        shell.signal_file = Some(true);
    }

    let mut config = ShellConfig::try_from(shell)?;
    config.batch_file = args.file.clone();
    Ok(config)
}
