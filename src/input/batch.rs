// src/input/batch.rs

use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use tracing::debug;

use crate::errors::Result;
use crate::fs::FileSystem;

use super::LineSource;

/// Lines of a command file, replayed in order.
///
/// Blank lines and lines whose first non-blank character is `#` are dropped
/// up front.
#[derive(Debug, Clone, Default)]
pub struct BatchSource {
    lines: VecDeque<String>,
}

impl BatchSource {
    /// Read the whole of `path` through `fs`.
    pub fn from_file(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let contents = fs.read_to_string(path)?;
        let source = Self::from_contents(&contents);
        debug!(path = %path.display(), lines = source.remaining(), "loaded batch file");
        Ok(source)
    }

    pub fn from_contents(contents: &str) -> Self {
        let lines = contents
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for BatchSource {
    fn next_line(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + '_>> {
        let next = self.lines.pop_front();
        Box::pin(async move { Ok(next) })
    }
}
