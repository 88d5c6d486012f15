// src/lib.rs

pub mod cli;
pub mod clock;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod input;
pub mod line;
pub mod logging;
pub mod signals;
pub mod state;
pub mod types;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::clock::{Clock, SystemClock};
use crate::config::load_config;
use crate::engine::{LoopExit, Shell, ShutdownRequest};
use crate::exec::ProcessLauncher;
use crate::fs::{FileSystem, RealFileSystem};
use crate::input::{BatchSource, InteractiveSource, LineSource};
use crate::signals::stats::{write_signal_helper_file, SIGNAL_HELPER_FILE};
use crate::signals::{spawn_signal_listener, SignalContext};
use crate::state::ShellState;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (CLI + optional TOML)
/// - shared shell state and the optional `signal.txt` helper
/// - the signal listener and its shutdown channel
/// - the line source (stdin or batch file) and the command loop
pub async fn run(args: CliArgs) -> Result<LoopExit> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let cfg = load_config(fs.as_ref(), &args)?;
    debug!(?cfg, "effective configuration");

    let state = Arc::new(ShellState::new(cfg.max_commands, clock.now()?));
    info!(pid = state.pid, "nanoshell starting");

    if cfg.signal_file {
        write_signal_helper_file(fs.as_ref(), Path::new(SIGNAL_HELPER_FILE), state.pid)?;
        info!(path = SIGNAL_HELPER_FILE, "signal helper written");
    }

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<ShutdownRequest>(4);
    let listener = spawn_signal_listener(
        SignalContext {
            state: Arc::clone(&state),
            fs: Arc::clone(&fs),
            clock,
            stats_dir: cfg.stats_dir.clone(),
            stats_prefix: cfg.stats_prefix.clone(),
        },
        shutdown_tx,
        std::io::stdout(),
    )?;

    if cfg.max_commands > 0 {
        announce(&format!(
            "[INFO] nanoShell will terminate after {} commands",
            cfg.max_commands
        ));
    }

    let result = match &cfg.batch_file {
        Some(path) => {
            let source = BatchSource::from_file(fs.as_ref(), path)?;
            run_loop(&state, source, shutdown_rx).await
        }
        None => {
            let source = InteractiveSource::new(cfg.prompt.clone());
            run_loop(&state, source, shutdown_rx).await
        }
    };
    listener.abort();

    let exit = result?;
    if exit != LoopExit::Interrupted {
        announce(&format!(
            "[INFO] nanoShell executed {} commands",
            state.counters.total_executed()
        ));
    }
    Ok(exit)
}

async fn run_loop<S: LineSource>(
    state: &Arc<ShellState>,
    source: S,
    shutdown_rx: mpsc::Receiver<ShutdownRequest>,
) -> errors::Result<LoopExit> {
    let mut shell = Shell::new(
        Arc::clone(state),
        source,
        ProcessLauncher,
        std::io::stdout(),
        shutdown_rx,
    );
    shell.run().await
}

fn announce(message: &str) {
    let mut out = std::io::stdout();
    if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        debug!(error = %e, "failed to print message");
    }
}

