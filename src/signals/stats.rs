// src/signals/stats.rs

//! Files and messages produced on behalf of signals: the SIGUSR2 statistics
//! file, the SIGUSR1 start-time line and the optional `kill` helper file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::state::{CounterSnapshot, Counters};

/// Timestamp layout embedded in statistics file names.
pub const STATS_TIMESTAMP_FORMAT: &str = "%Y.%m.%d_%Hh%M.%S";

/// Layout used when printing the start time.
pub const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Name of the one-time helper file listing `kill` invocations.
pub const SIGNAL_HELPER_FILE: &str = "signal.txt";

pub fn format_start_time(started_at: &DateTime<Local>) -> String {
    started_at.format(START_TIME_FORMAT).to_string()
}

/// `<dir>/<prefix>_<timestamp>.txt`
pub fn stats_file_path(dir: &Path, prefix: &str, at: &DateTime<Local>) -> PathBuf {
    dir.join(format!("{prefix}_{}.txt", at.format(STATS_TIMESTAMP_FORMAT)))
}

/// Plain-text body of a statistics file.
pub fn render_stats(snapshot: &CounterSnapshot) -> String {
    format!(
        "commands_executed: {}\nstdout_redirects: {}\nstderr_redirects: {}\n",
        snapshot.total_executed, snapshot.stdout_redirects, snapshot.stderr_redirects
    )
}

/// Snapshot `counters` and persist them to a freshly timestamped file.
///
/// Returns the path written.
pub fn write_stats_file(
    fs: &dyn FileSystem,
    clock: &dyn Clock,
    dir: &Path,
    prefix: &str,
    counters: &Counters,
) -> Result<PathBuf> {
    let now = clock.now()?;
    let path = stats_file_path(dir, prefix, &now);
    let snapshot = counters.snapshot();

    if fs.exists(&path) {
        debug!(path = %path.display(), "overwriting statistics file from the same second");
    }
    fs.write(&path, render_stats(&snapshot).as_bytes())?;
    info!(path = %path.display(), ?snapshot, "counters persisted");
    Ok(path)
}

pub fn render_signal_helper(pid: u32) -> String {
    format!("kill -SIGINT {pid}\nkill -SIGUSR1 {pid}\nkill -SIGUSR2 {pid}\n")
}

/// Write the `kill` helper file targeting `pid`.
pub fn write_signal_helper_file(fs: &dyn FileSystem, path: &Path, pid: u32) -> Result<()> {
    fs.write(path, render_signal_helper(pid).as_bytes())?;
    info!(path = %path.display(), pid, "signal helper file written");
    Ok(())
}
