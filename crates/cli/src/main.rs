// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! commit-lint CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use commit_lint::cli::Cli;
use commit_lint::error::ExitCode;

mod cmd_lint;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("COMMIT_LINT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("commit-lint: {}", e);
            match e.downcast_ref::<commit_lint::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout
            let code = if err.use_stderr() {
                ExitCode::ArgumentError
            } else {
                ExitCode::Success
            };
            err.print()?;
            return Ok(code);
        }
    };

    cmd_lint::run(&cli)
}
