// src/config/mod.rs

//! Configuration: optional TOML file, CLI overrides and validation.
//!
//! - [`model`] holds the raw deserialized file and the validated
//!   [`ShellConfig`].
//! - [`loader`] reads the file and merges it with the command line.
//! - [`validate`] turns raw values into a `ShellConfig`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_config, load_from_path};
pub use model::{RawConfigFile, RawShellSection, ShellConfig};
pub use validate::validate_max_commands;
