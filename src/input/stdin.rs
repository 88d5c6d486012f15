// src/input/stdin.rs

use std::future::Future;
use std::pin::Pin;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::trace;

use crate::errors::{Result, ShellError};

use super::LineSource;

/// Prompts on stdout and reads one line from stdin per call.
pub struct InteractiveSource {
    prompt: String,
    reader: BufReader<Stdin>,
    stdout: Stdout,
    buf: String,
}

impl InteractiveSource {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            reader: BufReader::new(io::stdin()),
            stdout: io::stdout(),
            buf: String::new(),
        }
    }

    async fn read_one(&mut self) -> Result<Option<String>> {
        self.stdout
            .write_all(self.prompt.as_bytes())
            .await
            .map_err(ShellError::ReadFailure)?;
        self.stdout.flush().await.map_err(ShellError::ReadFailure)?;

        self.buf.clear();
        let n = self
            .reader
            .read_line(&mut self.buf)
            .await
            .map_err(ShellError::ReadFailure)?;
        if n == 0 {
            trace!("stdin reached end of input");
            return Ok(None);
        }

        Ok(Some(strip_line_ending(&self.buf).to_string()))
    }
}

impl LineSource for InteractiveSource {
    fn next_line(&mut self) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + '_>> {
        Box::pin(self.read_one())
    }
}

/// Drop one trailing `\n` or `\r\n`.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

