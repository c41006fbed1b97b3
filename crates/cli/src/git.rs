// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for picking the diff-cover compare branch.

use std::path::Path;

use git2::{BranchType, Repository};

use crate::config::defaults::COMPARE_BRANCH;

/// Detect the upstream default branch.
///
/// Order: the branch `origin/HEAD` points at, `origin/main`, `origin/master`,
/// then local `main` or `master`.
pub fn detect_compare_branch(root: &Path) -> Option<String> {
    let repo = Repository::discover(root).ok()?;

    if let Ok(reference) = repo.find_reference("refs/remotes/origin/HEAD")
        && let Some(target) = reference.symbolic_target()
        && let Some(branch) = target.strip_prefix("refs/remotes/")
    {
        return Some(branch.to_string());
    }

    for name in ["origin/main", "origin/master"] {
        if repo.find_branch(name, BranchType::Remote).is_ok() {
            return Some(name.to_string());
        }
    }

    for name in ["main", "master"] {
        if repo.find_branch(name, BranchType::Local).is_ok() {
            return Some(name.to_string());
        }
    }

    None
}

/// The compare branch to use: configured, detected, or the fallback.
pub fn compare_branch(root: &Path, configured: Option<&str>) -> String {
    if let Some(branch) = configured {
        return branch.to_string();
    }
    match detect_compare_branch(root) {
        Some(branch) => {
            tracing::debug!("detected compare branch: {}", branch);
            branch
        }
        None => COMPARE_BRANCH.to_string(),
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
