// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::tool::ToolError;

/// Process exit codes.
///
/// Every failure maps to 1; the variants exist so call sites say why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All steps ran and no gate tripped.
    Success,
    /// Unknown or malformed command-line arguments.
    UsageError,
    /// A violation count exceeded the threshold.
    GateFailed,
    /// Configuration, launch, or I/O error.
    Error,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Success => 0,
            ExitCode::UsageError | ExitCode::GateFailed | ExitCode::Error => 1,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

/// Errors that abort the pipeline.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("failed to read coveralls repo token: {0}")]
    TokenRead(#[source] std::io::Error),

    #[error("no coveralls repo token given")]
    EmptyToken,

    #[error("failed to write {}: {source}", path.display())]
    ScopedWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode coveralls credentials: {0}")]
    Credentials(#[from] serde_yaml::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
