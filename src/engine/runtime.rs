// src/engine/runtime.rs

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::{open_redirect, CommandOutcome, LaunchRequest, Launcher};
use crate::input::LineSource;
use crate::state::ShellState;

use super::core::{plan_line, LineStep, PreparedCommand};
use super::{LoopExit, ShutdownRequest};

/// Reads lines, runs them one at a time and stops on `bye`, the command
/// threshold, end of input or a shutdown request.
///
/// User-facing messages go to `out`; diagnostics go through `tracing`.
pub struct Shell<S: LineSource, L: Launcher, W: Write + Send> {
    state: Arc<ShellState>,
    source: S,
    launcher: L,
    out: W,
    shutdown_rx: mpsc::Receiver<ShutdownRequest>,
}

impl<S: LineSource, L: Launcher, W: Write + Send> fmt::Debug for Shell<S, L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Whichever of the two raced futures finished first.
enum Next<T> {
    Ready(T),
    Shutdown(ShutdownRequest),
}

impl<S: LineSource, L: Launcher, W: Write + Send> Shell<S, L, W> {
    pub fn new(
        state: Arc<ShellState>,
        source: S,
        launcher: L,
        out: W,
        shutdown_rx: mpsc::Receiver<ShutdownRequest>,
    ) -> Self {
        Self {
            state,
            source,
            launcher,
            out,
            shutdown_rx,
        }
    }

    pub fn state(&self) -> &Arc<ShellState> {
        &self.state
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Main loop.
    ///
    /// The shutdown channel is polled first both while waiting for a line
    /// and while waiting for a child, so a pending request always wins.
    pub async fn run(&mut self) -> Result<LoopExit> {
        info!(pid = self.state.pid, "nanoshell loop started");

        let exit = loop {
            let next = tokio::select! {
                biased;
                request = next_shutdown(&mut self.shutdown_rx) => Next::Shutdown(request),
                line = self.source.next_line() => Next::Ready(line?),
            };

            let line = match next {
                Next::Shutdown(request) => break shutdown(request)?,
                Next::Ready(None) => {
                    info!("end of input");
                    break LoopExit::EndOfInput;
                }
                Next::Ready(Some(line)) => line,
            };

            if let Some(exit) = self.handle_line(&line).await? {
                break exit;
            }
        };

        info!(?exit, total = self.state.counters.total_executed(), "nanoshell loop finished");
        Ok(exit)
    }

    async fn handle_line(&mut self, line: &str) -> Result<Option<LoopExit>> {
        match plan_line(line, &self.state.counters)? {
            LineStep::Skip => Ok(None),
            LineStep::Rejected(reason) => {
                self.say(&format!("[ERROR] Wrong request '{line}' ({reason})"));
                Ok(None)
            }
            LineStep::InvalidRedirect(reason) => {
                self.say(&format!("[ERROR] Wrong request '{line}' ({reason})"));
                Ok(None)
            }
            LineStep::Bye => {
                self.say("[INFO] bye command detected. Terminating nanoShell");
                Ok(Some(LoopExit::Bye))
            }
            LineStep::Execute(command) => {
                if let Some(exit) = self.execute(command).await? {
                    return Ok(Some(exit));
                }

                let counters = &self.state.counters;
                if counters.threshold_reached() {
                    let max = counters.max_commands();
                    self.say(&format!(
                        "[INFO] Maximum number of commands ({max}) reached. Terminating nanoShell"
                    ));
                    return Ok(Some(LoopExit::ThresholdReached));
                }
                Ok(None)
            }
        }
    }

    /// Launch one command and wait for it, unless a shutdown request
    /// arrives first.
    async fn execute(&mut self, command: PreparedCommand<'_>) -> Result<Option<LoopExit>> {
        let program = command.program();

        let redirect = match command.redirect() {
            Some(spec) => match open_redirect(&spec) {
                Ok(opened) => Some(opened),
                Err(e) => {
                    warn!(path = spec.target, mode = %spec.mode, error = %e, "running without redirect");
                    self.say(&format!("[ERROR] Error opening file '{}': {e}", spec.target));
                    None
                }
            },
            None => None,
        };

        let request = LaunchRequest {
            program,
            args: command.arguments(),
            redirect,
        };

        let next = tokio::select! {
            biased;
            request = next_shutdown(&mut self.shutdown_rx) => Next::Shutdown(request),
            outcome = self.launcher.launch(request) => Next::Ready(outcome?),
        };

        let outcome = match next {
            Next::Shutdown(request) => return shutdown(request).map(Some),
            Next::Ready(outcome) => outcome,
        };

        match &outcome {
            CommandOutcome::ExecFailed { reason } => {
                self.say(&format!("[ERROR] Error executing '{program}': {reason}"));
            }
            CommandOutcome::Failed(code) => debug!(program, code, "command failed"),
            CommandOutcome::Success => {}
        }
        Ok(None)
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}").and_then(|()| self.out.flush()) {
            debug!(error = %e, "failed to print message");
        }
    }
}

fn shutdown(request: ShutdownRequest) -> Result<LoopExit> {
    match request {
        ShutdownRequest::Interrupted => {
            info!("shutdown requested");
            Ok(LoopExit::Interrupted)
        }
        ShutdownRequest::Fatal(err) => Err(err),
    }
}

/// Next shutdown request. Pends forever once every sender is gone, so a
/// finished listener never looks like a request.
async fn next_shutdown(rx: &mut mpsc::Receiver<ShutdownRequest>) -> ShutdownRequest {
    match rx.recv().await {
        Some(request) => request,
        None => std::future::pending().await,
    }
}
