use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};

use nanoshell::clock::Clock;
use nanoshell::errors::{Result, ShellError};
use nanoshell::input::LineSource;

/// Line source fed from a fixed list.
///
/// Counts how many lines were actually handed out, so tests can check that
/// the loop stopped reading. With `pending_at_end`, the source blocks
/// forever after the last line instead of reporting end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    reads: Arc<AtomicUsize>,
    pending_at_end: bool,
}

impl ScriptedSource {
    pub fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn pending_at_end(mut self) -> Self {
        self.pending_at_end = true;
        self
    }

    /// Shared counter of lines handed out so far.
    pub fn reads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl LineSource for ScriptedSource {
    fn next_line(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + '_>> {
        let next = self.lines.pop_front();
        if next.is_some() {
            self.reads.fetch_add(1, Ordering::SeqCst);
        }
        let pend = next.is_none() && self.pending_at_end;

        Box::pin(async move {
            if pend {
                std::future::pending::<()>().await;
            }
            Ok(next)
        })
    }
}

/// Clock frozen at one instant, or permanently broken.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Option<DateTime<Local>>,
}

impl FixedClock {
    pub fn at(at: DateTime<Local>) -> Self {
        Self { at: Some(at) }
    }

    /// 2024-03-05 14:07:09 local time.
    pub fn sample() -> Self {
        Self::at(Local.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).single().unwrap())
    }

    pub fn broken() -> Self {
        Self { at: None }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Local>> {
        self.at
            .ok_or_else(|| ShellError::TimeFailure("clock is broken".to_string()))
    }
}
