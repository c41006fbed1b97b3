// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the diff-cover step.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Fake `coverage xml -i -o <path>` that writes the report.
const WRITE_XML: &str = "echo '<coverage/>' > \"$4\"";

#[test]
fn diff_cover_reports_against_compare_branch_and_removes_xml() {
    let project = Project::new();
    project.tool("coverage", WRITE_XML);
    // Record whether the report existed while diff-cover ran.
    project.tool("diff-cover", "test -f \"$1\" && echo present > seen.txt");

    project.cmd().arg("--diff-cover").assert().success();

    let calls = project.calls();
    assert_eq!(
        calls[1..],
        [
            "coverage xml -i -o coverage.xml",
            "diff-cover coverage.xml --compare-branch=origin/master",
        ]
    );
    assert_eq!(std::fs::read_to_string(project.join("seen.txt")).unwrap(), "present\n");
    assert!(!project.join("coverage.xml").exists());
}

#[test]
fn quality_and_diff_cover_run_in_order() {
    let project = Project::new();
    project.tool("coverage", WRITE_XML);

    project.cmd().args(["--with-quality", "--diff-cover"]).assert().success();

    assert_eq!(
        project.programs(),
        vec!["nosetests", "pylint", "pep8", "pylint", "coverage", "diff-cover"]
    );
    assert!(!project.join("coverage.xml").exists());
}

#[test]
fn xml_removed_when_diff_cover_fails() {
    let project = Project::new();
    project.tool("coverage", WRITE_XML);
    project.tool("diff-cover", "exit 1");

    project.cmd().arg("-d").assert().success();
    assert!(!project.join("coverage.xml").exists());
}

#[test]
fn xml_removed_when_diff_cover_is_missing() {
    let project = Project::new();
    project.tool("coverage", WRITE_XML);
    std::fs::remove_file(project.tool_path("diff-cover")).unwrap();

    project.cmd().arg("-d").assert().code(1);
    assert!(!project.join("coverage.xml").exists());
}

#[test]
fn quality_gate_still_applies_after_diff_cover() {
    let project = Project::new();
    project.tool("coverage", WRITE_XML);
    project.tool("pep8", "echo 'git2edx/a.py:1:1: E101 indentation'");

    project.cmd().args(["-q", "-d"]).assert().code(1);
    assert_eq!(project.programs().last().map(String::as_str), Some("diff-cover"));
}
