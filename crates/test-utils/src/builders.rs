use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc;

use nanoshell::engine::{Shell, ShutdownRequest};
use nanoshell::state::ShellState;

use crate::{FakeLauncher, ScriptedSource, SharedBuffer};

/// A shell wired to fakes, plus handles to everything a test inspects.
pub struct ShellHarness {
    pub shell: Shell<ScriptedSource, FakeLauncher, SharedBuffer>,
    pub launcher: FakeLauncher,
    pub output: SharedBuffer,
    pub state: Arc<ShellState>,
    pub shutdown_tx: mpsc::Sender<ShutdownRequest>,
}

/// Builder for [`ShellHarness`] to simplify test setup.
pub struct ShellBuilder {
    source: ScriptedSource,
    launcher: FakeLauncher,
    max_commands: u64,
}

impl ShellBuilder {
    pub fn new() -> Self {
        Self {
            source: ScriptedSource::default(),
            launcher: FakeLauncher::new(),
            max_commands: 0,
        }
    }

    pub fn lines<I, T>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.source = ScriptedSource::new(lines);
        self
    }

    pub fn source(mut self, source: ScriptedSource) -> Self {
        self.source = source;
        self
    }

    pub fn launcher(mut self, launcher: FakeLauncher) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn max_commands(mut self, max: u64) -> Self {
        self.max_commands = max;
        self
    }

    pub fn build(self) -> ShellHarness {
        let state = Arc::new(ShellState::new(self.max_commands, Local::now()));
        let output = SharedBuffer::new();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(4);
        let shell = Shell::new(
            Arc::clone(&state),
            self.source,
            self.launcher.clone(),
            output.clone(),
            shutdown_rx,
        );

        ShellHarness {
            shell,
            launcher: self.launcher,
            output,
            state,
            shutdown_tx,
        }
    }
}

impl Default for ShellBuilder {
    fn default() -> Self {
        Self::new()
    }
}
