// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint result types for output formatting.

use std::fmt;

use serde::Serialize;

/// Machine-readable tag for a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    EmptyMessage,
    TitleTooLong,
    TitleLong,
    TrailingPeriod,
    InvalidFormat,
    InvalidType,
    UncommonScope,
    EmptyDescription,
    DescriptionTooShort,
    UppercaseDescription,
    PastTense,
    MissingBlankLine,
    BodyLineTooLong,
}

/// A single error or warning about a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one commit message.
///
/// Errors make the message invalid. Warnings are advisory only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl LintReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, kind: FindingKind, message: impl Into<String>) {
        self.errors.push(Finding::new(kind, message));
    }

    pub(crate) fn warn(&mut self, kind: FindingKind, message: impl Into<String>) {
        self.warnings.push(Finding::new(kind, message));
    }
}
