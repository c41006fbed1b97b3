// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: load config, run the steps, gate on violations.

use anyhow::Context;
use termcolor::StandardStream;

use runtests::cli::Cli;
use runtests::color::resolve_color;
use runtests::config::{self, Config};
use runtests::discovery;
use runtests::error::ExitCode;
use runtests::report;
use runtests::runner::{self, RunContext, StepFailure};
use runtests::token::StdinTokenSource;
use runtests::tool::SystemRunner;

pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;

    let config_path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(&cwd),
    };
    let config = match &config_path {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let root = discovery::project_root(config_path.as_deref(), &cwd);
    let package = config::resolve_package(&root, &config.project)?;

    match &config_path {
        Some(path) => tracing::info!("config: {}", path.display()),
        None => tracing::info!("config: (defaults)"),
    }
    tracing::info!("package: {} (tests: {})", package.name, package.test_package());

    let tools = SystemRunner::new(&root);
    let ctx = RunContext {
        root: &root,
        config: &config,
        package: &package,
        tools: &tools,
        tokens: &StdinTokenSource,
    };

    let mut stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
    let (result, failure) = match runner::run(&ctx, &cli.options(), &mut stdout) {
        Ok(result) => (result, None),
        Err(StepFailure { result, error }) => (result, Some(error)),
    };
    // Counts gathered before a failing step are still reported.
    report::write_summary(&mut stdout, &result)?;
    if let Some(error) = failure {
        return Err(error.into());
    }

    if result.passed() { Ok(ExitCode::Success) } else { Ok(ExitCode::GateFailed) }
}
