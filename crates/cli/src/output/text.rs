// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Diagnostics go to stderr, the success banner to stdout:
//! ```text
//! Validating commit message...
//!
//! Message:
//! feat(wombat): Add login
//!
//! warning: scope 'wombat' is not common. Common scopes: auth, api, domain, data, config...
//!
//! error: invalid commit message
//!
//!   • description must not start with an uppercase letter
//!
//! See https://www.conventionalcommits.org for more information
//! ```

use std::io;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::Reporter;
use crate::color::scheme;
use crate::lint::Finding;

/// Text reporter with color support.
pub struct TextReporter<O: WriteColor, E: WriteColor> {
    stdout: O,
    stderr: E,
}

impl TextReporter<StandardStream, StandardStream> {
    /// Reporter over the process stdout and stderr.
    pub fn standard(stdout_color: ColorChoice, stderr_color: ColorChoice) -> Self {
        Self::new(
            StandardStream::stdout(stdout_color),
            StandardStream::stderr(stderr_color),
        )
    }
}

impl<O: WriteColor, E: WriteColor> TextReporter<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Return the underlying (stdout, stderr) writers.
    pub fn into_inner(self) -> (O, E) {
        (self.stdout, self.stderr)
    }
}

impl<O: WriteColor, E: WriteColor> Reporter for TextReporter<O, E> {
    fn info(&mut self, text: &str) -> io::Result<()> {
        self.stderr.set_color(&scheme::info())?;
        write!(self.stderr, "{}", text)?;
        self.stderr.reset()?;
        writeln!(self.stderr)
    }

    fn message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.stderr)?;
        self.stderr.set_color(&scheme::label())?;
        write!(self.stderr, "Message:")?;
        self.stderr.reset()?;
        writeln!(self.stderr)?;
        writeln!(self.stderr, "{}", message)?;
        writeln!(self.stderr)
    }

    fn warning(&mut self, finding: &Finding) -> io::Result<()> {
        self.stderr.set_color(&scheme::warning())?;
        write!(self.stderr, "warning:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", finding)
    }

    fn errors(&mut self, findings: &[Finding]) -> io::Result<()> {
        writeln!(self.stderr)?;
        self.stderr.set_color(&scheme::error())?;
        write!(self.stderr, "error:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " invalid commit message")?;
        writeln!(self.stderr)?;

        for finding in findings {
            writeln!(self.stderr, "  • {}", finding)?;
        }
        writeln!(self.stderr)
    }

    fn success(&mut self, text: &str) -> io::Result<()> {
        self.stdout.set_color(&scheme::success())?;
        write!(self.stdout, "✔ {}", text)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
