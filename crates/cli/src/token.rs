// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coveralls repo token input.

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Coveralls repo token: ";

/// Supplies the Coveralls repo token.
pub trait TokenSource {
    /// Read the token. Surrounding whitespace is stripped; an empty string
    /// means none was given.
    fn read_token(&self) -> io::Result<String>;
}

/// Prompts on stderr and reads one line from stdin.
pub struct StdinTokenSource;

impl TokenSource for StdinTokenSource {
    fn read_token(&self) -> io::Result<String> {
        let stdin = io::stdin();
        let stderr = io::stderr();
        prompt_for_token(&mut stdin.lock(), &mut stderr.lock())
    }
}

/// Write [`PROMPT`] to `output`, then read a single line from `input`.
pub fn prompt_for_token<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
