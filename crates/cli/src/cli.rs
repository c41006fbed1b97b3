// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

use crate::color::ColorMode;
use crate::error::ExitCode;
use crate::runner::Options;

/// Run a Python package's tests with coverage, plus optional quality checks
#[derive(Debug, Parser)]
#[command(name = "run-tests")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run the linter and style checker; fail on any violation
    #[arg(short = 'q', long = "with-quality")]
    pub with_quality: bool,

    /// Prompt for a Coveralls repo token and upload coverage
    #[arg(short = 'c', long = "with-coveralls")]
    pub with_coveralls: bool,

    /// Report coverage of lines changed against the upstream branch
    #[arg(short = 'd', long = "diff-cover")]
    pub diff_cover: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "RUNTESTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log each step to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Step selection from the flags.
    pub fn options(&self) -> Options {
        Options {
            run_quality: self.with_quality,
            run_coveralls: self.with_coveralls,
            run_diff_cover: self.diff_cover,
        }
    }
}

/// Parse arguments without exiting the process.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Exit code for a parse outcome that stops the run.
///
/// `--help` and `--version` succeed; every argument error exits 1.
pub fn exit_code_for(err: &clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::UsageError,
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
