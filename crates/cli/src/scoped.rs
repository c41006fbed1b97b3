// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient files removed when they go out of scope.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// A file owned for the duration of a pipeline step.
///
/// The file is deleted on drop, including when the step bails out early
/// with an error. A file that was never created is not an error.
#[derive(Debug)]
pub struct ScopedFile {
    path: PathBuf,
}

impl ScopedFile {
    /// Own a path that a tool is about to write.
    pub fn claim(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write `contents` to `path` and own the result.
    ///
    /// The file is created readable by the owner only.
    pub fn create(path: PathBuf, contents: &[u8]) -> io::Result<Self> {
        let guard = Self::claim(path);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&guard.path)?;
        file.write_all(contents)?;
        file.flush()?;

        Ok(guard)
    }
}

impl Drop for ScopedFile {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("removed {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("failed to remove {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
#[path = "scoped_tests.rs"]
mod tests;
