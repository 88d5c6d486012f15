// src/line/tokenize.rs

//! Whitespace tokenizer producing borrowed argument vectors.

use std::ops::Deref;

use crate::errors::Result;

/// Initial capacity of a token vector, and the step it grows by.
pub const TOKEN_CHUNK: usize = 32;

/// Ordered arguments of one command line.
///
/// Every token is a slice of the line it was split from, so the line must
/// outlive the vector and anything built from it (redirect targets, launch
/// requests). The end of the vector is the "no more arguments" marker;
/// truncating it is how redirect operators are cut out of the argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVector<'line> {
    tokens: Vec<&'line str>,
}

impl<'line> TokenVector<'line> {
    /// Program name, if the vector is not empty.
    pub fn program(&self) -> Option<&'line str> {
        self.tokens.first().copied()
    }

    /// Arguments after the program name.
    pub fn arguments(&self) -> &[&'line str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[&'line str] {
        &self.tokens
    }

    pub fn capacity(&self) -> usize {
        self.tokens.capacity()
    }

    /// Move the end marker to `index`, dropping every token from there on.
    pub fn truncate(&mut self, index: usize) {
        self.tokens.truncate(index);
    }

    /// True if any token is exactly `word`.
    pub fn contains_token(&self, word: &str) -> bool {
        self.tokens.iter().any(|t| *t == word)
    }

    /// Tokens joined with single spaces.
    pub fn joined(&self) -> String {
        self.tokens.join(" ")
    }
}

impl<'line> Deref for TokenVector<'line> {
    type Target = [&'line str];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

/// Split `line` on runs of whitespace.
///
/// The vector starts with [`TOKEN_CHUNK`] slots and grows by the same amount
/// whenever it fills up. Failing to grow is reported as
/// [`ShellError::AllocationFailure`](crate::errors::ShellError::AllocationFailure).
pub fn tokenize(line: &str) -> Result<TokenVector<'_>> {
    let mut tokens: Vec<&str> = Vec::new();
    tokens.try_reserve_exact(TOKEN_CHUNK)?;

    for token in line.split_whitespace() {
        if tokens.len() == tokens.capacity() {
            tokens.try_reserve_exact(TOKEN_CHUNK)?;
        }
        tokens.push(token);
    }

    Ok(TokenVector { tokens })
}
