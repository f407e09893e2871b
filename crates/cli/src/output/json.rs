// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed), so stdout holds
//! exactly one document.

use std::io::Write;

use serde::Serialize;

use crate::lint::{Finding, LintReport};

/// Serialized shape of a lint run.
#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    errors: &'a [Finding],
    warnings: &'a [Finding],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &LintReport) -> std::io::Result<()> {
        let output = JsonOutput {
            valid: report.is_valid(),
            errors: &report.errors,
            warnings: &report.warnings,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
