//! Output formatting for lint results.
//!
//! Text output goes through the [`Reporter`] trait so the validator never
//! deals with colors or streams. JSON output is buffered and written once.

pub mod json;
pub mod text;

use std::io;

use crate::lint::{Finding, LintReport};

/// Documentation pointer printed after a failed lint.
pub const DOCS_URL: &str = "https://www.conventionalcommits.org";

/// Sink for human-readable lint output.
pub trait Reporter {
    /// Informational line (banners, hints).
    fn info(&mut self, text: &str) -> io::Result<()>;

    /// Echo the message under test.
    fn message(&mut self, message: &str) -> io::Result<()>;

    /// Advisory finding. Never affects the verdict.
    fn warning(&mut self, finding: &Finding) -> io::Result<()>;

    /// Failure verdict with every error found.
    fn errors(&mut self, findings: &[Finding]) -> io::Result<()>;

    /// Success verdict.
    fn success(&mut self, text: &str) -> io::Result<()>;
}

/// Drive a reporter through a complete lint run.
///
/// Order: banner, message, warnings, then the verdict. Warnings are always
/// shown, whatever the verdict.
pub fn report(
    reporter: &mut dyn Reporter,
    message: &str,
    result: &LintReport,
) -> io::Result<()> {
    reporter.info("Validating commit message...")?;
    reporter.message(message)?;

    for warning in &result.warnings {
        reporter.warning(warning)?;
    }

    if result.is_valid() {
        reporter.success("Commit message is valid")
    } else {
        reporter.errors(&result.errors)?;
        reporter.info(&format!("See {DOCS_URL} for more information"))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
