// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command lines for each pipeline step.

use std::path::Path;

use crate::config::{Config, Package};
use crate::tool::Invocation;

/// Test runner with HTML coverage over the package and its tests.
pub fn tests(config: &Config, package: &Package) -> Invocation {
    Invocation::new(&config.tests.runner)
        .args(["--with-coverage", "--cover-html"])
        .arg(format!("--cover-package={},{}", package.name, package.test_package()))
        .args(config.tests.args.iter().cloned())
}

/// Full human-readable linter report, streamed.
pub fn lint_report(config: &Config, package: &Package) -> Invocation {
    Invocation::new(&config.quality.linter)
        .arg(rcfile_arg(&config.quality.rcfile))
        .arg(&package.name)
}

/// Linter in minimal mode (messages only), captured for counting.
pub fn lint_count(config: &Config, package: &Package) -> Invocation {
    Invocation::new(&config.quality.linter)
        .arg(rcfile_arg(&config.quality.rcfile))
        .arg("--reports=n")
        .arg(&package.name)
        .captured()
}

/// Style checker report, captured so it can be printed and counted.
pub fn style_report(config: &Config, package: &Package) -> Invocation {
    Invocation::new(&config.quality.style).arg(&package.name).captured()
}

/// Coverage XML export, ignoring errors from incomplete data.
pub fn coverage_xml(config: &Config) -> Invocation {
    Invocation::new(&config.diff_cover.coverage)
        .args(["xml", "-i", "-o"])
        .arg(config.diff_cover.xml.display().to_string())
}

/// Diff coverage report against `compare_branch`.
pub fn diff_cover(config: &Config, compare_branch: &str) -> Invocation {
    Invocation::new(&config.diff_cover.reporter)
        .arg(config.diff_cover.xml.display().to_string())
        .arg(format!("--compare-branch={}", compare_branch))
}

/// Coverage upload. Credentials are read from the file in the project root.
pub fn upload(config: &Config) -> Invocation {
    Invocation::new(&config.coveralls.uploader)
}

fn rcfile_arg(rcfile: &Path) -> String {
    format!("--rcfile={}", rcfile.display())
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
