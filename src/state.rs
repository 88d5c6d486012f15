// src/state.rs

//! Process-wide shell state shared by the command loop and the signal
//! listener.
//!
//! Counters are plain atomics: the loop is the only writer, the listener only
//! takes snapshots, and neither ever holds a lock across an await point.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

use crate::types::{RedirectMode, Stream};

/// Execution counters.
#[derive(Debug, Default)]
pub struct Counters {
    total_executed: AtomicU64,
    stdout_redirects: AtomicU64,
    stderr_redirects: AtomicU64,
    max_commands: u64,
}

/// Point-in-time copy of [`Counters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub total_executed: u64,
    pub stdout_redirects: u64,
    pub stderr_redirects: u64,
    pub max_commands: u64,
}

impl Counters {
    /// `max_commands == 0` means unbounded.
    pub fn new(max_commands: u64) -> Self {
        Self {
            max_commands,
            ..Self::default()
        }
    }

    /// Account for one command about to be executed.
    ///
    /// `total_executed` always moves by exactly one; the matching redirect
    /// counter moves by one when `redirect` is set.
    pub fn record_command(&self, redirect: Option<RedirectMode>) {
        match redirect.map(RedirectMode::stream) {
            Some(Stream::Stdout) => {
                self.stdout_redirects.fetch_add(1, Ordering::SeqCst);
            }
            Some(Stream::Stderr) => {
                self.stderr_redirects.fetch_add(1, Ordering::SeqCst);
            }
            None => {}
        }
        self.total_executed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn total_executed(&self) -> u64 {
        self.total_executed.load(Ordering::SeqCst)
    }

    pub fn max_commands(&self) -> u64 {
        self.max_commands
    }

    /// True once a bounded shell has executed `max_commands` commands.
    pub fn threshold_reached(&self) -> bool {
        self.max_commands > 0 && self.total_executed() >= self.max_commands
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total_executed: self.total_executed.load(Ordering::SeqCst),
            stdout_redirects: self.stdout_redirects.load(Ordering::SeqCst),
            stderr_redirects: self.stderr_redirects.load(Ordering::SeqCst),
            max_commands: self.max_commands,
        }
    }
}

/// Everything the signal listener needs to observe.
#[derive(Debug)]
pub struct ShellState {
    pub counters: Counters,
    pub started_at: DateTime<Local>,
    pub pid: u32,
}

impl ShellState {
    pub fn new(max_commands: u64, started_at: DateTime<Local>) -> Self {
        Self {
            counters: Counters::new(max_commands),
            started_at,
            pid: std::process::id(),
        }
    }
}
