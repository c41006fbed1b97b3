// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External tool invocation.
//!
//! Every step of the pipeline runs a blocking child process through the
//! [`ToolRunner`] trait, so the pipeline can be driven by a fake in tests.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Failure to launch or wait on a tool. Non-zero exits are not errors.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// What happens to a tool's stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdout {
    /// Streamed straight to our stdout.
    Inherit,
    /// Collected into [`ToolOutput::stdout`].
    Capture,
}

/// A single tool command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdout: Stdout,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new(), stdout: Stdout::Inherit }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn captured(mut self) -> Self {
        self.stdout = Stdout::Capture;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a finished tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, or None when killed by a signal.
    pub code: Option<i32>,
    /// Captured stdout (empty for [`Stdout::Inherit`]).
    pub stdout: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs tools to completion.
pub trait ToolRunner {
    fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError>;
}

/// Runs tools as child processes in the project root.
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }
}

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ToolOutput, ToolError> {
        tracing::info!("running: {}", invocation);

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&self.root);

        let spawn_err =
            |source| ToolError::Spawn { program: invocation.program.clone(), source };

        let output = match invocation.stdout {
            Stdout::Inherit => {
                let status = command.status().map_err(spawn_err)?;
                ToolOutput { code: status.code(), stdout: String::new() }
            }
            Stdout::Capture => {
                let child = command
                    .stdout(Stdio::piped())
                    .stderr(Stdio::inherit())
                    .spawn()
                    .map_err(spawn_err)?;
                let out = child.wait_with_output().map_err(spawn_err)?;
                ToolOutput {
                    code: out.status.code(),
                    stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                }
            }
        };

        if !output.success() {
            match output.code {
                Some(code) => tracing::warn!("`{}` exited with status {}", invocation.program, code),
                None => tracing::warn!("`{}` was terminated by a signal", invocation.program),
            }
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
