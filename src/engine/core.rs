// src/engine/core.rs

//! Pure per-line decision logic.
//!
//! [`plan_line`] runs the validator, the tokenizer, the `bye` check and the
//! redirect detector on one raw line and returns a [`LineStep`] telling the
//! async shell what to do. It performs no IO; the only side effect is the
//! counter update for a command that is about to run.

use tracing::debug;

use crate::errors::Result;
use crate::line::{
    apply_redirect, check_line, tokenize, RedirectError, RedirectSpec, Rejection, TokenVector,
    BYE_TOKEN,
};
use crate::state::Counters;

/// A validated command ready to be launched.
///
/// Borrows every token from the raw line it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCommand<'line> {
    program: &'line str,
    tokens: TokenVector<'line>,
    redirect: Option<RedirectSpec<'line>>,
}

impl<'line> PreparedCommand<'line> {
    pub fn program(&self) -> &'line str {
        self.program
    }

    /// Arguments after the program, with any redirect already cut out.
    pub fn arguments(&self) -> &[&'line str] {
        self.tokens.arguments()
    }

    pub fn tokens(&self) -> &TokenVector<'line> {
        &self.tokens
    }

    pub fn redirect(&self) -> Option<RedirectSpec<'line>> {
        self.redirect
    }
}

/// What the loop should do with one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStep<'line> {
    /// Empty or all-whitespace: read the next line silently.
    Skip,
    /// The validator refused the line.
    Rejected(Rejection),
    /// A redirect operator without a program or without a target.
    InvalidRedirect(RedirectError),
    /// The line contains a `bye` token.
    Bye,
    /// Launch this command. It has already been counted.
    Execute(PreparedCommand<'line>),
}

/// Decide what to do with `line`.
///
/// Only [`LineStep::Execute`] touches `counters`. Fails only when the token
/// vector cannot be allocated.
pub fn plan_line<'line>(line: &'line str, counters: &Counters) -> Result<LineStep<'line>> {
    if line.trim().is_empty() {
        return Ok(LineStep::Skip);
    }

    if let Err(rejection) = check_line(line) {
        debug!(%rejection, "line rejected");
        return Ok(LineStep::Rejected(rejection));
    }

    let mut tokens = tokenize(line)?;
    let Some(program) = tokens.program() else {
        return Ok(LineStep::Skip);
    };

    if tokens.contains_token(BYE_TOKEN) {
        return Ok(LineStep::Bye);
    }

    match apply_redirect(&mut tokens, counters) {
        Ok(redirect) => Ok(LineStep::Execute(PreparedCommand {
            program,
            tokens,
            redirect,
        })),
        Err(err) => Ok(LineStep::InvalidRedirect(err)),
    }
}

