// src/input/mod.rs

//! Where command lines come from.
//!
//! The loop pulls lines through the [`LineSource`] trait:
//! - [`InteractiveSource`] prompts on stdout and reads stdin.
//! - [`BatchSource`] replays the lines of a file given with `--file`.

pub mod batch;
pub mod stdin;

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

pub use batch::BatchSource;
pub use stdin::InteractiveSource;

/// Produces one command line at a time.
pub trait LineSource: Send {
    /// Next line without its line terminator, or `None` at end of input.
    ///
    /// Dropping the returned future must be safe: the loop abandons a pending
    /// read when a shutdown request arrives.
    fn next_line(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + '_>>;
}
