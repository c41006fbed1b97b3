// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for runtests.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn config_is_found_from_a_subdirectory() {
    let project = Project::new();

    project.cmd().current_dir(project.join("git2edx/tests")).assert().success();
    assert_eq!(project.programs(), vec!["nosetests"]);
}

#[test]
fn unknown_key_exits_one_before_any_tool() {
    let project = Project::new();
    project.config("bogus = 1\n");

    project
        .cmd()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("invalid config"));
    assert!(project.calls().is_empty());
}

#[test]
fn explicit_config_path_is_used() {
    let project = Project::new();
    let alt = project.join("ci.toml");
    std::fs::copy(project.join("runtests.toml"), &alt).unwrap();
    std::fs::remove_file(project.join("runtests.toml")).unwrap();

    project.cmd().args(["--config", "ci.toml", "-q"]).assert().success();
    assert_eq!(project.programs().len(), 4);
}

#[test]
fn missing_explicit_config_exits_one() {
    let project = Project::new();

    project
        .cmd()
        .args(["-C", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("failed to read"));
    assert!(project.calls().is_empty());
}

#[test]
fn configured_rcfile_and_test_subpackage_reach_the_tools() {
    let project = Project::new();
    let config = std::fs::read_to_string(project.join("runtests.toml"))
        .unwrap()
        .replace("package = \"git2edx\"", "package = \"git2edx\"\ntests = \"unit\"")
        .replace("[quality]", "[quality]\nrcfile = \"git2edx/pylintrc\"");
    project.file("runtests.toml", &config);

    project.cmd().arg("-q").assert().success();
    let calls = project.calls();
    assert_eq!(
        calls[0],
        "nosetests --with-coverage --cover-html --cover-package=git2edx,git2edx.unit"
    );
    assert_eq!(calls[1], "pylint --rcfile=git2edx/pylintrc git2edx");
}
