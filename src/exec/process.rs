// src/exec/process.rs

//! Runs one command as a child process and waits for it.

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{Result, ShellError};
use crate::exec::{CommandOutcome, LaunchRequest};
use crate::types::Stream;

/// Linux errno values for running out of processes, memory or descriptors.
const EAGAIN: i32 = 11;
const ENOMEM: i32 = 12;
const ENFILE: i32 = 23;
const EMFILE: i32 = 24;

/// Spawn `request.program` with its arguments and wait for it to exit.
///
/// - The child inherits the shell's stdio, except for a stream covered by
///   `request.redirect`, which is handed the already-opened file.
/// - A spawn failure caused by the command line itself (missing program, bad
///   path, name too long, not executable, argument too big, interior NUL)
///   fails only this command: [`CommandOutcome::ExecFailed`].
/// - Running out of processes, memory or file descriptors means the shell
///   cannot create children at all and is returned as
///   [`ShellError::ForkFailure`].
///
/// The child is spawned with `kill_on_drop(true)`: if the returned future is
/// dropped mid-wait (shutdown), the child is killed instead of orphaned, and
/// the wait is skipped.
pub async fn run_command(request: LaunchRequest<'_>) -> Result<CommandOutcome> {
    let LaunchRequest {
        program,
        args,
        redirect,
    } = request;

    info!(program, ?args, redirect = ?redirect.as_ref().map(|r| r.mode), "starting command");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    if let Some(redirect) = redirect {
        let stdio = Stdio::from(redirect.file);
        match redirect.mode.stream() {
            Stream::Stdout => {
                cmd.stdout(stdio);
            }
            Stream::Stderr => {
                cmd.stderr(stdio);
            }
        }
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) if is_resource_exhaustion(&source) => {
            return Err(ShellError::ForkFailure(source));
        }
        Err(source) => {
            warn!(program, error = %source, "command could not be executed");
            return Ok(CommandOutcome::ExecFailed {
                reason: source.to_string(),
            });
        }
    };

    let status = child.wait().await.map_err(ShellError::ForkFailure)?;
    let outcome = outcome_from_status(status);

    info!(program, exit_code = outcome.exit_code(), "command exited");
    Ok(outcome)
}

fn is_resource_exhaustion(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::OutOfMemory
        || matches!(
            err.raw_os_error(),
            Some(EAGAIN | ENOMEM | ENFILE | EMFILE)
        )
}

fn outcome_from_status(status: ExitStatus) -> CommandOutcome {
    match status.code() {
        Some(0) => CommandOutcome::Success,
        Some(code) => CommandOutcome::Failed(code),
        None => {
            let code = terminated_by_signal(status);
            debug!(code, "command terminated by a signal");
            CommandOutcome::Failed(code)
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = status.signal() {
        128 + signal
    } else if status.core_dumped() {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> i32 {
    -1
}
