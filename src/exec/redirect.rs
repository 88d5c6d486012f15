// src/exec/redirect.rs

//! Opening redirect targets for a child process.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;

use crate::line::RedirectSpec;
use crate::types::RedirectMode;

/// A redirect target opened and ready to become a child's stdout or stderr.
#[derive(Debug)]
pub struct OpenedRedirect {
    pub mode: RedirectMode,
    pub path: PathBuf,
    pub file: File,
}

/// Open `spec.target` for writing: created if missing, then truncated or
/// appended to depending on the mode.
pub fn open_redirect(spec: &RedirectSpec<'_>) -> io::Result<OpenedRedirect> {
    let path = PathBuf::from(spec.target);

    let mut options = OpenOptions::new();
    options.write(true).create(true);
    if spec.mode.appends() {
        options.append(true);
    } else {
        options.truncate(true);
    }

    let file = options.open(&path)?;
    Ok(OpenedRedirect {
        mode: spec.mode,
        path,
        file,
    })
}
