// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the lint and style gate.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const THREE_STYLE_VIOLATIONS: &str = "printf 'git2edx/a.py:1:80: E501 line too long\\n\
git2edx/a.py:9:1: E302 expected 2 blank lines\\n\
git2edx/config.py:4:1: W391 blank line at end of file\\n'";

#[test]
fn quality_runs_lint_then_style_then_lint_count() {
    let project = Project::new();

    project.cmd().arg("--with-quality").assert().success();
    assert_eq!(
        project.calls(),
        vec![
            "nosetests --with-coverage --cover-html --cover-package=git2edx,git2edx.tests",
            "pylint --rcfile=pylintrc git2edx",
            "pep8 git2edx",
            "pylint --rcfile=pylintrc --reports=n git2edx",
        ]
    );
}

#[test]
fn zero_violations_exit_zero() {
    let project = Project::new();
    // Module headers alone are not violations.
    project.tool("pylint", "echo '************* Module git2edx'");

    project
        .cmd()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicates::str::contains("lint: 0 violations"))
        .stdout(predicates::str::contains("style: 0 violations"))
        .stdout(predicates::str::contains("PASS"));
}

#[test]
fn score_footer_on_a_clean_package_exits_zero() {
    let project = Project::new();
    project.tool(
        "pylint",
        "printf '\\n------------------------------------------------------------------\\n\
         Your code has been rated at 10.00/10\\n\\n'",
    );

    project
        .cmd()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicates::str::contains("lint: 0 violations"))
        .stdout(predicates::str::contains("PASS"));
}

#[test]
fn style_violations_exit_one() {
    let project = Project::new();
    project.tool("pep8", THREE_STYLE_VIOLATIONS);

    project
        .cmd()
        .arg("-q")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("E501 line too long"))
        .stdout(predicates::str::contains("style: 3 violations"))
        .stdout(predicates::str::contains("FAIL: style violations exceed the threshold (3 > 0)"));
}

#[test]
fn lint_violation_exits_one() {
    let project = Project::new();
    project.tool(
        "pylint",
        "echo '************* Module git2edx.config'\n\
         echo 'C: 20, 0: Missing function docstring (missing-docstring)'\n\
         exit 16",
    );

    project
        .cmd()
        .arg("--with-quality")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("lint: 1 violation"));
}

#[test]
fn tool_output_is_ignored_without_quality_flag() {
    let project = Project::new();
    project.tool("pep8", THREE_STYLE_VIOLATIONS);
    project.tool("pylint", "echo 'C: 1, 0: bad (bad)'");

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("violation").not());
    assert_eq!(project.programs(), vec!["nosetests"]);
}
