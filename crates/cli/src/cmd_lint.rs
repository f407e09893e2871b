// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use std::io::IsTerminal;

use commit_lint::cli::{Cli, OutputFormat};
use commit_lint::color::resolve_color;
use commit_lint::error::{Error, ExitCode};
use commit_lint::input::read_message;
use commit_lint::lint::{Rules, validate};
use commit_lint::output::{self, json::JsonFormatter, text::TextReporter};

/// Read, validate and report one commit message.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let source = cli.source();
    tracing::debug!(source = source.describe(), "reading commit message");

    let message = read_message(&source, std::io::stdin().lock())?;
    tracing::trace!(bytes = message.len(), "read commit message");

    let result = validate(&message, &Rules::default());
    tracing::debug!(
        valid = result.is_valid(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated commit message"
    );

    match cli.output {
        OutputFormat::Text => {
            let color_for = |is_terminal| resolve_color(cli.color, cli.no_color, is_terminal);
            let mut reporter = TextReporter::standard(
                color_for(std::io::stdout().is_terminal()),
                color_for(std::io::stderr().is_terminal()),
            );
            output::report(&mut reporter, &message, &result).map_err(Error::Output)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            JsonFormatter::new(stdout.lock())
                .write(&result)
                .map_err(Error::Output)?;
        }
    }

    if result.is_valid() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::LintFailed)
    }
}
