// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Quality summary output.

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::color::scheme;
use crate::config::defaults::VIOLATION_THRESHOLD;
use crate::runner::RunResult;

/// Write the violation summary and gate verdict.
///
/// Writes nothing when no quality check ran.
pub fn write_summary<W: WriteColor>(w: &mut W, result: &RunResult) -> io::Result<()> {
    let counts = result.counts();
    if counts.is_empty() {
        return Ok(());
    }

    writeln!(w)?;
    for (check, count) in &counts {
        w.set_color(&scheme::check_name())?;
        write!(w, "{}", check.name())?;
        w.reset()?;
        write!(w, ": ")?;
        w.set_color(&scheme::count())?;
        write!(w, "{}", count)?;
        w.reset()?;
        writeln!(w, " {}", plural(*count, "violation", "violations"))?;
    }

    let failures = result.failures();
    if failures.is_empty() {
        w.set_color(&scheme::pass())?;
        write!(w, "PASS")?;
        w.reset()?;
        writeln!(w, ": quality checks")?;
    }
    for failure in failures {
        w.set_color(&scheme::fail())?;
        write!(w, "FAIL")?;
        w.reset()?;
        writeln!(
            w,
            ": {} violations exceed the threshold ({} > {})",
            failure.check.name(),
            failure.count,
            VIOLATION_THRESHOLD
        )?;
    }
    w.flush()
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
