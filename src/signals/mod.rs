// src/signals/mod.rs

//! Asynchronous signal handling.
//!
//! Signals are not handled in interrupt context. A dedicated Tokio task owns
//! one `signal-hook` stream for `SIGUSR1`, `SIGUSR2` and `SIGINT`, turns each
//! delivery into a [`SignalEvent`] and handles it there:
//!
//! - `SIGUSR1` prints the shell's start time.
//! - `SIGUSR2` persists a counter snapshot to a timestamped file.
//! - `SIGINT` prints the sender's PID and asks the command loop to stop at
//!   once.
//!
//! The stream carries the `siginfo` origin of each delivery, which is where
//! the sender's PID comes from.
//!
//! The listener only reads atomics from [`ShellState`], so it can run at any
//! point of the loop without racing it. Anything fatal it hits is forwarded
//! to the loop as [`ShutdownRequest::Fatal`].

pub mod stats;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use futures_util::StreamExt;
use signal_hook::consts::{SIGINT, SIGUSR1, SIGUSR2};
use signal_hook::iterator::exfiltrator::WithOrigin;
use signal_hook::low_level::siginfo::Origin;
use signal_hook_tokio::SignalsInfo;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::clock::Clock;
use crate::engine::ShutdownRequest;
use crate::errors::{Result, ShellError};
use crate::fs::FileSystem;
use crate::state::ShellState;

/// One handled signal delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEvent {
    /// `SIGUSR1`
    PrintStartTime,
    /// `SIGUSR2`
    PersistCounters,
    /// `SIGINT`, with the sender's PID when the kernel reported one.
    Terminate { sender: Option<i32> },
}

impl SignalEvent {
    /// Event for one delivery, or `None` for a signal nanoshell ignores.
    pub fn from_origin(origin: &Origin) -> Option<Self> {
        match origin.signal {
            SIGUSR1 => Some(SignalEvent::PrintStartTime),
            SIGUSR2 => Some(SignalEvent::PersistCounters),
            SIGINT => Some(SignalEvent::Terminate {
                sender: origin.process.as_ref().map(|p| p.pid),
            }),
            _ => None,
        }
    }
}

/// What the listener should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalFlow {
    Continue,
    Terminate,
}

/// Everything a signal event may read or write.
#[derive(Clone)]
pub struct SignalContext {
    pub state: Arc<ShellState>,
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub stats_dir: PathBuf,
    pub stats_prefix: String,
}

/// Handle a single event, writing user-facing messages to `out`.
pub fn handle_signal_event(
    event: SignalEvent,
    ctx: &SignalContext,
    out: &mut dyn Write,
) -> Result<SignalFlow> {
    match event {
        SignalEvent::PrintStartTime => {
            let started = stats::format_start_time(&ctx.state.started_at);
            say(out, &format!("[INFO] nanoShell started at: {started}"));
            Ok(SignalFlow::Continue)
        }
        SignalEvent::PersistCounters => {
            let path = stats::write_stats_file(
                ctx.fs.as_ref(),
                ctx.clock.as_ref(),
                &ctx.stats_dir,
                &ctx.stats_prefix,
                &ctx.state.counters,
            )?;
            say(out, &format!("[INFO] Counters written to {}", path.display()));
            Ok(SignalFlow::Continue)
        }
        SignalEvent::Terminate { sender } => {
            let sender = sender.map_or_else(|| "unknown".to_string(), |pid| pid.to_string());
            say(
                out,
                &format!("[INFO] SIGINT received from PID {sender}. Terminating nanoShell"),
            );
            Ok(SignalFlow::Terminate)
        }
    }
}

/// Install the signal stream and spawn the listener task.
///
/// Handlers are registered before this returns, so a failure surfaces as
/// [`ShellError::SignalSetupFailure`] at startup rather than inside the task.
/// User-facing messages are written to `out`.
pub fn spawn_signal_listener<W>(
    ctx: SignalContext,
    shutdown_tx: mpsc::Sender<ShutdownRequest>,
    mut out: W,
) -> Result<JoinHandle<()>>
where
    W: Write + Send + 'static,
{
    let signals = SignalsInfo::with_exfiltrator([SIGUSR1, SIGUSR2, SIGINT], WithOrigin::default())
        .map_err(|source| ShellError::SignalSetupFailure {
            signal: "SIGUSR1/SIGUSR2/SIGINT",
            source,
        })?;

    let handle = tokio::spawn(async move {
        info!(pid = ctx.state.pid, "signal listener started");
        tokio::pin!(signals);

        while let Some(origin) = signals.next().await {
            let Some(event) = SignalEvent::from_origin(&origin) else {
                continue;
            };
            debug!(?event, "signal received");

            let request = match handle_signal_event(event, &ctx, &mut out) {
                Ok(SignalFlow::Continue) => continue,
                Ok(SignalFlow::Terminate) => ShutdownRequest::Interrupted,
                Err(err) => {
                    error!(?event, error = ?err, "fatal error while handling signal");
                    ShutdownRequest::Fatal(err)
                }
            };

            if shutdown_tx.send(request).await.is_err() {
                debug!("command loop already gone; dropping shutdown request");
            }
            break;
        }

        info!("signal listener finished");
    });

    Ok(handle)
}

fn say(out: &mut dyn Write, message: &str) {
    if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        debug!(error = %e, "failed to print signal message");
    }
}
