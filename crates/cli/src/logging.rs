// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup.
//!
//! Logs go to stderr so tool reports on stdout stay clean. The filter comes
//! from `RUNTESTS_LOG`; without it only warnings are shown, or step-level
//! info with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "RUNTESTS_LOG";

/// Default filter directive.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "runtests=info,warn" } else { "warn" }
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
