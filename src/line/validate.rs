// src/line/validate.rs

//! Character-level validation of a raw command line.
//!
//! There is no real shell parsing behind nanoshell, so characters that a
//! shell would interpret (quotes, globs, expansions, separators) would reach
//! the program literally. Lines carrying any of them are rejected outright.

use thiserror::Error;

/// Characters that may not appear anywhere in a command line.
pub const DISALLOWED_CHARS: &[char] = &[
    '!', '"', '#', '$', '&', '\'', '(', ')', ',', ':', ';', '<', '=', '?', '@', '[', '\\', ']',
    '^', '`', '{', '|', '}', '~',
];

/// Characters that may not start a command line.
pub const DISALLOWED_LEADING: &[char] = &[' ', '\t', '%'];

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("line may not start with {0:?}")]
    LeadingCharacter(char),

    #[error("unsupported character {ch:?} at position {position}")]
    DisallowedCharacter { ch: char, position: usize },
}

/// Check a line, reporting the first problem found.
pub fn check_line(line: &str) -> Result<(), Rejection> {
    if let Some(first) = line.chars().next() {
        if DISALLOWED_LEADING.contains(&first) {
            return Err(Rejection::LeadingCharacter(first));
        }
    }

    match line
        .chars()
        .enumerate()
        .find(|(_, c)| DISALLOWED_CHARS.contains(c))
    {
        Some((position, ch)) => Err(Rejection::DisallowedCharacter { ch, position }),
        None => Ok(()),
    }
}

pub fn is_valid_line(line: &str) -> bool {
    check_line(line).is_ok()
}
