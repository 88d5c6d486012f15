// src/line/mod.rs

//! Per-line processing: validation, tokenization and redirect detection.
//!
//! - [`validate`] rejects lines containing characters nanoshell cannot pass
//!   through safely.
//! - [`tokenize`] splits a line into a [`TokenVector`] borrowing from it.
//! - [`redirect`] strips a redirect operator and its target from the vector.

pub mod redirect;
pub mod tokenize;
pub mod validate;

pub use redirect::{apply_redirect, detect_redirect, RedirectError, RedirectSpec};
pub use tokenize::{tokenize, TokenVector, TOKEN_CHUNK};
pub use validate::{check_line, is_valid_line, Rejection};

/// Token that terminates nanoshell wherever it appears on a line.
pub const BYE_TOKEN: &str = "bye";
