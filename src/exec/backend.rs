// src/exec/backend.rs

//! Pluggable launcher abstraction.
//!
//! The command loop talks to a `Launcher` instead of spawning processes
//! itself. Production uses [`ProcessLauncher`]; tests provide a fake that
//! records what would have been run.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::{CommandOutcome, LaunchRequest};

use super::process::run_command;

/// Runs one command to completion.
pub trait Launcher: Send {
    /// Launch the command described by `request` and wait for it.
    ///
    /// Dropping the returned future must abandon the wait; the loop relies on
    /// this to honour shutdown requests while a command is running.
    fn launch<'a>(
        &'a mut self,
        request: LaunchRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}

/// Launcher spawning real child processes through `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch<'a>(
        &'a mut self,
        request: LaunchRequest<'a>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(run_command(request))
    }
}
