// src/line/redirect.rs

//! Detection of the `>`, `>>`, `2>` and `2>>` redirect operators.

use std::str::FromStr;

use thiserror::Error;

use crate::line::tokenize::TokenVector;
use crate::state::Counters;
use crate::types::RedirectMode;

/// A redirect found on a command line.
///
/// `target` borrows from the same line as the token vector it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectSpec<'line> {
    pub mode: RedirectMode,
    pub target: &'line str,
}

/// Malformed redirect usage. The command is not run and nothing is counted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    #[error("missing file name after '{operator}'")]
    MissingTarget { operator: RedirectMode },

    #[error("missing command before '{operator}'")]
    MissingProgram { operator: RedirectMode },
}

/// Find the first redirect operator in `tokens`.
///
/// On a match the vector is truncated at the operator, so neither the
/// operator nor its target (nor anything after them) reaches the program.
/// Only the first operator is honoured.
pub fn detect_redirect<'line>(
    tokens: &mut TokenVector<'line>,
) -> Result<Option<RedirectSpec<'line>>, RedirectError> {
    let found = tokens
        .iter()
        .enumerate()
        .find_map(|(i, tok)| RedirectMode::from_str(tok).ok().map(|mode| (i, mode)));

    let Some((index, mode)) = found else {
        return Ok(None);
    };

    if index == 0 {
        return Err(RedirectError::MissingProgram { operator: mode });
    }

    let target = tokens
        .get(index + 1)
        .copied()
        .ok_or(RedirectError::MissingTarget { operator: mode })?;

    tokens.truncate(index);
    Ok(Some(RedirectSpec { mode, target }))
}

/// Detect the redirect and account for the command in `counters`.
///
/// Counters are only touched when the line is well formed: exactly one
/// increment of `total_executed`, plus one of the matching redirect counter.
pub fn apply_redirect<'line>(
    tokens: &mut TokenVector<'line>,
    counters: &Counters,
) -> Result<Option<RedirectSpec<'line>>, RedirectError> {
    let redirect = detect_redirect(tokens)?;
    counters.record_command(redirect.map(|r| r.mode));
    Ok(redirect)
}
