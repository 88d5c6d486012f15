// src/types.rs

use std::fmt;
use std::str::FromStr;

/// Standard stream a redirect operator targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Redirection requested by one of the `>`, `>>`, `2>`, `2>>` operators.
///
/// - `StdoutTruncate` / `StderrTruncate` create or truncate the target.
/// - `StdoutAppend` / `StderrAppend` create the target or append to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectMode {
    StdoutTruncate,
    StdoutAppend,
    StderrTruncate,
    StderrAppend,
}

impl RedirectMode {
    pub const ALL: [RedirectMode; 4] = [
        RedirectMode::StdoutTruncate,
        RedirectMode::StdoutAppend,
        RedirectMode::StderrTruncate,
        RedirectMode::StderrAppend,
    ];

    /// The literal operator token for this mode.
    pub fn operator(self) -> &'static str {
        match self {
            RedirectMode::StdoutTruncate => ">",
            RedirectMode::StdoutAppend => ">>",
            RedirectMode::StderrTruncate => "2>",
            RedirectMode::StderrAppend => "2>>",
        }
    }

    pub fn stream(self) -> Stream {
        match self {
            RedirectMode::StdoutTruncate | RedirectMode::StdoutAppend => Stream::Stdout,
            RedirectMode::StderrTruncate | RedirectMode::StderrAppend => Stream::Stderr,
        }
    }

    pub fn appends(self) -> bool {
        matches!(self, RedirectMode::StdoutAppend | RedirectMode::StderrAppend)
    }
}

impl fmt::Display for RedirectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

impl FromStr for RedirectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RedirectMode::ALL
            .into_iter()
            .find(|mode| mode.operator() == s)
            .ok_or_else(|| format!("not a redirect operator: {s:?}"))
    }
}
