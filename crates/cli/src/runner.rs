// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential step runner.
//!
//! Runs the baseline tests, then the optional quality, diff-cover and
//! Coveralls steps in that fixed order. Tool exit statuses are not
//! propagated; only the violation counts decide the outcome.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::defaults::VIOLATION_THRESHOLD;
use crate::config::{Config, Package};
use crate::count;
use crate::error::RunError;
use crate::git;
use crate::scoped::ScopedFile;
use crate::steps;
use crate::token::TokenSource;
use crate::tool::ToolRunner;

/// Which optional steps to run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub run_quality: bool,
    pub run_coveralls: bool,
    pub run_diff_cover: bool,
}

/// Violation counts. `None` means the check did not run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub lint_violations: Option<usize>,
    pub style_violations: Option<usize>,
}

/// A quality check that can fail the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Lint,
    Style,
}

impl Check {
    pub fn name(self) -> &'static str {
        match self {
            Check::Lint => "lint",
            Check::Style => "style",
        }
    }
}

/// A count over the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateFailure {
    pub check: Check,
    pub count: usize,
}

impl RunResult {
    /// Counts that ran, in report order.
    pub fn counts(&self) -> Vec<(Check, usize)> {
        [(Check::Lint, self.lint_violations), (Check::Style, self.style_violations)]
            .into_iter()
            .filter_map(|(check, count)| count.map(|c| (check, c)))
            .collect()
    }

    /// Counts over [`VIOLATION_THRESHOLD`]. Checks that did not run are exempt.
    pub fn failures(&self) -> Vec<GateFailure> {
        self.counts()
            .into_iter()
            .filter(|&(_, count)| count > VIOLATION_THRESHOLD)
            .map(|(check, count)| GateFailure { check, count })
            .collect()
    }

    pub fn passed(&self) -> bool {
        self.failures().is_empty()
    }
}

/// What the runner needs besides the options.
pub struct RunContext<'a> {
    pub root: &'a Path,
    pub config: &'a Config,
    pub package: &'a Package,
    pub tools: &'a dyn ToolRunner,
    pub tokens: &'a dyn TokenSource,
}

/// A step aborted the run. `result` holds the counts gathered before it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct StepFailure {
    pub result: RunResult,
    pub error: RunError,
}

/// Coveralls credentials file contents.
#[derive(Serialize)]
struct Credentials<'a> {
    repo_token: &'a str,
}

/// Run every enabled step. Captured reports are echoed to `out`.
pub fn run(ctx: &RunContext, options: &Options, out: &mut dyn Write) -> Result<RunResult, StepFailure> {
    let mut result = RunResult::default();
    match run_steps(ctx, options, &mut result, out) {
        Ok(()) => Ok(result),
        Err(error) => Err(StepFailure { result, error }),
    }
}

fn run_steps(
    ctx: &RunContext,
    options: &Options,
    result: &mut RunResult,
    out: &mut dyn Write,
) -> Result<(), RunError> {
    run_tests(ctx)?;

    if options.run_quality {
        let (lint, style) = run_quality(ctx, out)?;
        result.lint_violations = Some(lint);
        result.style_violations = Some(style);
    }

    if options.run_diff_cover {
        run_diff_cover(ctx)?;
    }

    if options.run_coveralls {
        run_coveralls(ctx)?;
    }

    Ok(())
}

fn run_tests(ctx: &RunContext) -> Result<(), RunError> {
    tracing::info!("running tests for {}", ctx.package.name);
    // A failing suite is logged by the tool runner and does not stop the run.
    ctx.tools.run(&steps::tests(ctx.config, ctx.package))?;
    Ok(())
}

/// Returns `(lint_violations, style_violations)`.
fn run_quality(ctx: &RunContext, out: &mut dyn Write) -> Result<(usize, usize), RunError> {
    tracing::info!("running quality checks");
    let (config, package) = (ctx.config, ctx.package);

    ctx.tools.run(&steps::lint_report(config, package))?;

    let style = ctx.tools.run(&steps::style_report(config, package))?;
    out.write_all(style.stdout.as_bytes())?;
    out.flush()?;

    let lint = ctx.tools.run(&steps::lint_count(config, package))?;

    let lint_violations = count::lint_violations(&lint.stdout);
    let style_violations = count::style_violations(&style.stdout);
    tracing::debug!(lint_violations, style_violations, "counted violations");
    Ok((lint_violations, style_violations))
}

fn run_diff_cover(ctx: &RunContext) -> Result<(), RunError> {
    tracing::info!("running diff-cover");
    let xml = ScopedFile::claim(ctx.root.join(&ctx.config.diff_cover.xml));

    ctx.tools.run(&steps::coverage_xml(ctx.config))?;

    let branch = git::compare_branch(ctx.root, ctx.config.diff_cover.compare_branch.as_deref());
    ctx.tools.run(&steps::diff_cover(ctx.config, &branch))?;

    drop(xml);
    Ok(())
}

fn run_coveralls(ctx: &RunContext) -> Result<(), RunError> {
    let token = ctx.tokens.read_token().map_err(RunError::TokenRead)?;
    if token.is_empty() {
        return Err(RunError::EmptyToken);
    }

    let contents = serde_yaml::to_string(&Credentials { repo_token: &token })?;
    let path = ctx.root.join(&ctx.config.coveralls.credentials);
    let credentials = ScopedFile::create(path.clone(), contents.as_bytes())
        .map_err(|source| RunError::ScopedWrite { path, source })?;

    tracing::info!("uploading coverage");
    ctx.tools.run(&steps::upload(ctx.config))?;

    drop(credentials);
    Ok(())
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
