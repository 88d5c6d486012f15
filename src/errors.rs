// src/errors.rs

//! Crate-wide error type and exit-code mapping.
//!
//! Every fatal condition gets its own variant and its own process exit code,
//! so a wrapper script can tell *why* nanoshell stopped. Recoverable problems
//! (rejected lines, bad redirect syntax, a command that cannot be executed)
//! never reach this type; the loop reports them and keeps going.
//!
//! Variants wrapping another error keep it as their `source` only. Print
//! with `{:#}` through `anyhow` to get the whole chain.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("memory allocation failed")]
    AllocationFailure(#[from] TryReserveError),

    #[error("error reading commands")]
    ReadFailure(#[source] std::io::Error),

    #[error("error creating child process")]
    ForkFailure(#[source] std::io::Error),

    #[error("error executing '{program}'")]
    ExecFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {path:?}")]
    IoFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install handler for {signal}")]
    SignalSetupFailure {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read the system clock: {0}")]
    TimeFailure(String),

    #[error("invalid maximum number of commands: {0} (must be a positive integer)")]
    InvalidThreshold(i64),

    #[error("configuration error: {0}")]
    ConfigFailure(String),

    #[error("TOML parsing error")]
    TomlError(#[from] toml::de::Error),
}

impl ShellError {
    /// Process exit code used when this error terminates nanoshell.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::ReadFailure(_) => 1,
            ShellError::AllocationFailure(_) => 2,
            ShellError::ForkFailure(_) => 3,
            ShellError::ExecFailure { .. } => EXEC_FAILURE_CODE,
            ShellError::IoFailure { .. } => 5,
            ShellError::SignalSetupFailure { .. } => 6,
            ShellError::TimeFailure(_) => 7,
            ShellError::InvalidThreshold(_) => 8,
            ShellError::ConfigFailure(_) | ShellError::TomlError(_) => 9,
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        ShellError::IoFailure {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Exit code reported for a command whose program could not be executed.
pub const EXEC_FAILURE_CODE: i32 = 4;

pub type Result<T> = std::result::Result<T, ShellError>;
