// src/engine/mod.rs

//! The nanoshell command loop.
//!
//! The pure per-line decision logic lives in [`core`]: given a raw line it
//! says whether to skip it, reject it, stop, or run a prepared command. The
//! async shell around it is implemented in [`runtime`] and owns the line
//! source, the launcher and the shutdown channel fed by the signal listener.

use crate::errors::ShellError;

/// Sent by the signal listener to stop the loop.
#[derive(Debug)]
pub enum ShutdownRequest {
    /// `SIGINT`: stop now, abandoning any pending read or child wait.
    Interrupted,
    /// The listener hit an unrecoverable error.
    Fatal(ShellError),
}

/// Why the loop stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// A `bye` token was seen.
    Bye,
    /// The configured maximum number of commands was executed.
    ThresholdReached,
    /// The line source ran dry.
    EndOfInput,
    /// `SIGINT` was received.
    Interrupted,
}

pub mod core;
pub mod runtime;

pub use self::core::{plan_line, LineStep, PreparedCommand};
pub use runtime::Shell;
