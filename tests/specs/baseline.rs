// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for argument handling and the baseline test step.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const TESTS_CALL: &str = "nosetests --with-coverage --cover-html --cover-package=git2edx,git2edx.tests";

#[test]
fn no_flags_runs_only_the_tests() {
    let project = Project::new();

    project.cmd().assert().success();
    assert_eq!(project.calls(), vec![TESTS_CALL]);
}

#[test]
fn failing_tests_still_exit_zero() {
    let project = Project::new();
    project.tool("nosetests", "echo 'FAILED (failures=2)'\nexit 1");

    project
        .cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("FAILED (failures=2)"))
        .stderr(predicates::str::contains("exited with status 1").count(1))
        .stderr(predicates::str::contains("tests failed").not());
}

#[test]
fn unknown_flag_runs_no_tool() {
    let project = Project::new();

    project.cmd().args(["-q", "--bogus"]).assert().code(1);
    assert!(project.calls().is_empty());
}

#[test]
fn help_runs_no_tool() {
    let project = Project::new();

    project.cmd().args(["-q", "-c", "-d", "--help"]).assert().success();
    assert!(project.calls().is_empty());
}

#[test]
fn missing_test_runner_is_an_error() {
    let project = Project::new();
    std::fs::remove_file(project.tool_path("nosetests")).unwrap();

    project
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("error: failed to run"));
}

#[test]
fn verbose_logs_each_step_to_stderr() {
    let project = Project::new();

    project
        .cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicates::str::contains("running tests for git2edx"));
}
