// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Python package resolution.

use std::path::Path;

use super::{ConfigError, ProjectConfig};

/// Directories never treated as the project package.
const SKIP_DIRS: &[&str] = &[
    "tests", "test", "docs", "build", "dist", "venv", "env", "node_modules", "__pycache__",
];

/// The package the tools run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    /// Test subpackage name, without the package prefix.
    pub tests: String,
}

impl Package {
    /// Dotted test subpackage, e.g. `mypkg.tests`.
    pub fn test_package(&self) -> String {
        format!("{}.{}", self.name, self.tests)
    }
}

/// Resolve the package from config, falling back to auto-detection.
pub fn resolve_package(root: &Path, project: &ProjectConfig) -> Result<Package, ConfigError> {
    let name = match &project.package {
        Some(name) => name.clone(),
        None => {
            let detected = detect_package(root)
                .ok_or_else(|| ConfigError::NoPackage { root: root.to_path_buf() })?;
            tracing::debug!("auto-detected Python package: {}", detected);
            detected
        }
    };
    Ok(Package { name, tests: project.tests.clone() })
}

/// Detect the Python package at `root`.
///
/// Prefers the `[project] name` from pyproject.toml when a matching package
/// directory exists, then a single top-level directory with `__init__.py`.
pub fn detect_package(root: &Path) -> Option<String> {
    if let Some(name) = pyproject_name(root)
        && is_package_dir(&root.join(&name))
    {
        return Some(name);
    }

    let entries = std::fs::read_dir(root).ok()?;
    let mut candidates: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.') && !SKIP_DIRS.contains(&name.as_str()))
        .filter(|name| is_package_dir(&root.join(name)))
        .collect();

    if candidates.len() == 1 { candidates.pop() } else { None }
}

fn pyproject_name(root: &Path) -> Option<String> {
    let content = std::fs::read_to_string(root.join("pyproject.toml")).ok()?;
    let value = content.parse::<toml::Table>().ok()?;
    let name = value.get("project")?.get("name")?.as_str()?;
    Some(name.replace('-', "_"))
}

fn is_package_dir(dir: &Path) -> bool {
    dir.join("__init__.py").is_file()
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
