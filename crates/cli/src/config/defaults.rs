// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants in their `Default` impls.

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "runtests.toml";

/// Violations tolerated per quality check before the run fails.
pub const VIOLATION_THRESHOLD: usize = 0;

/// Default tool executables.
pub mod tools {
    pub const TEST_RUNNER: &str = "nosetests";
    pub const LINTER: &str = "pylint";
    pub const STYLE_CHECKER: &str = "pep8";
    pub const COVERAGE: &str = "coverage";
    pub const DIFF_COVER: &str = "diff-cover";
    pub const UPLOADER: &str = "coveralls";
}

/// Default file locations, relative to the project root.
pub mod paths {
    pub const RCFILE: &str = "pylintrc";
    pub const COVERAGE_XML: &str = "coverage.xml";
    pub const CREDENTIALS: &str = ".coveralls.yml";
}

/// Test subpackage name appended to the package (`<package>.tests`).
pub const TEST_SUBPACKAGE: &str = "tests";

/// Compare branch used when none is configured and none can be detected.
pub const COMPARE_BRANCH: &str = "origin/master";
