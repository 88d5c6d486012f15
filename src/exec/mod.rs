// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`redirect`] opens redirect targets with truncate/append semantics.
//! - [`process`] spawns a single child with `tokio::process::Command`, wires
//!   an opened redirect into its stdio and waits for it.
//! - [`backend`] provides the `Launcher` trait and the production
//!   `ProcessLauncher`, which tests replace with a fake.

pub mod backend;
pub mod process;
pub mod redirect;

pub use backend::{Launcher, ProcessLauncher};
pub use process::run_command;
pub use redirect::{open_redirect, OpenedRedirect};

use crate::errors::EXEC_FAILURE_CODE;

/// Everything needed to launch one command.
///
/// `program` and `args` borrow from the command line, which therefore stays
/// alive until the launch has completed.
#[derive(Debug)]
pub struct LaunchRequest<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
    pub redirect: Option<OpenedRedirect>,
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// Non-zero exit status, or `128 + signo` when killed by a signal.
    Failed(i32),
    /// The program could not be executed at all.
    ExecFailed { reason: String },
}

impl CommandOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandOutcome::Success => 0,
            CommandOutcome::Failed(code) => *code,
            CommandOutcome::ExecFailed { .. } => EXEC_FAILURE_CODE,
        }
    }
}
