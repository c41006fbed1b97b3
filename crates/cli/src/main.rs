// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_run;

use runtests::cli;
use runtests::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, argument errors to stderr.
            let _ = err.print();
            return cli::exit_code_for(&err).into();
        }
    };

    runtests::logging::init(cli.verbose);

    match cmd_run::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::Error.into()
        }
    }
}
