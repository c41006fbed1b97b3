// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! run-tests: run a Python package's tests with coverage, then optional
//! lint/style checks, a diff-cover report and a Coveralls upload.

pub mod cli;
pub mod color;
pub mod config;
pub mod count;
pub mod discovery;
pub mod error;
pub mod git;
pub mod logging;
pub mod report;
pub mod runner;
pub mod scoped;
pub mod steps;
pub mod token;
pub mod tool;
