// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violation counting over linter and style checker output.
//!
//! Each non-blank report line is one violation. The linter also prints a
//! `************* Module foo` header per module, which is not a violation.
//! Newer linters end even the minimal report with a score footer: a rule
//! of dashes and a `Your code has been rated at ...` line.

/// Shortest run of `*` that marks a linter separator line.
const SEPARATOR_RUN: &str = "*********";

/// Opening of the linter's score line.
const SCORE_PREFIX: &str = "Your code has been rated at";

/// Whether `line` is a linter module separator.
pub fn is_separator(line: &str) -> bool {
    line.contains(SEPARATOR_RUN)
}

/// Whether `line` belongs to the linter's score footer.
pub fn is_score_footer(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(SCORE_PREFIX) || (!line.is_empty() && line.chars().all(|c| c == '-'))
}

/// Count linter violations, skipping separators, the score footer and
/// blank lines.
pub fn lint_violations(output: &str) -> usize {
    output
        .lines()
        .filter(|l| !l.trim().is_empty() && !is_separator(l) && !is_score_footer(l))
        .count()
}

/// Count style checker violations, skipping blank lines.
pub fn style_violations(output: &str) -> usize {
    output.lines().filter(|l| !l.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
