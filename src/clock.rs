// src/clock.rs

//! Wall-clock access, injectable so timestamped output can be tested.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local};

use crate::errors::{Result, ShellError};

pub trait Clock: Send + Sync {
    fn now(&self) -> Result<DateTime<Local>>;
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Local>> {
        let now = SystemTime::now();
        // A clock set before the epoch is the only way reading time can fail.
        now.duration_since(UNIX_EPOCH)
            .map_err(|e| ShellError::TimeFailure(e.to_string()))?;
        Ok(DateTime::<Local>::from(now))
    }
}
