// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `runtests.toml`.
//!
//! Every table is optional and every field has a default, so an absent
//! file behaves like an empty one.

pub mod defaults;
mod package;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use package::{Package, detect_package, resolve_package};

/// Configuration errors. All of them are reported before any tool runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error(
        "no Python package found in {}; set `package` under [project] in {}",
        root.display(),
        defaults::CONFIG_FILE
    )]
    NoPackage { root: PathBuf },
}

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    pub tests: TestsConfig,
    pub quality: QualityConfig,
    pub diff_cover: DiffCoverConfig,
    pub coveralls: CoverallsConfig,
}

/// `[project]`: what the tools run against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Package name (None = auto-detect).
    pub package: Option<String>,

    /// Test subpackage, joined to the package with a dot.
    pub tests: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { package: None, tests: defaults::TEST_SUBPACKAGE.to_string() }
    }
}

/// `[tests]`: the baseline test-and-coverage step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestsConfig {
    pub runner: String,

    /// Extra arguments appended after the coverage flags.
    pub args: Vec<String>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self { runner: defaults::tools::TEST_RUNNER.to_string(), args: Vec::new() }
    }
}

/// `[quality]`: linter and style checker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualityConfig {
    pub linter: String,

    /// Linter rule file, relative to the project root.
    pub rcfile: PathBuf,

    pub style: String,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            linter: defaults::tools::LINTER.to_string(),
            rcfile: PathBuf::from(defaults::paths::RCFILE),
            style: defaults::tools::STYLE_CHECKER.to_string(),
        }
    }
}

/// `[diff_cover]`: coverage XML export and diff report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffCoverConfig {
    pub coverage: String,
    pub reporter: String,

    /// Transient XML report, relative to the project root.
    pub xml: PathBuf,

    /// Branch to diff against (None = detect the upstream default branch).
    pub compare_branch: Option<String>,
}

impl Default for DiffCoverConfig {
    fn default() -> Self {
        Self {
            coverage: defaults::tools::COVERAGE.to_string(),
            reporter: defaults::tools::DIFF_COVER.to_string(),
            xml: PathBuf::from(defaults::paths::COVERAGE_XML),
            compare_branch: None,
        }
    }
}

/// `[coveralls]`: coverage upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverallsConfig {
    pub uploader: String,

    /// Transient credentials file, relative to the project root.
    pub credentials: PathBuf,
}

impl Default for CoverallsConfig {
    fn default() -> Self {
        Self {
            uploader: defaults::tools::UPLOADER.to_string(),
            credentials: PathBuf::from(defaults::paths::CREDENTIALS),
        }
    }
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source: Box::new(source) })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
