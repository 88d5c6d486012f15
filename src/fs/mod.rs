// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::errors::{Result, ShellError};

pub mod mock;

/// Abstract filesystem interface for the files nanoshell reads and writes
/// itself (batch files, statistics files, the signal helper file).
///
/// Redirect targets are not routed through here: their handles are passed
/// straight to the child process.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Create or truncate `path` and write `contents` to it.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| ShellError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).map_err(|e| ShellError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
