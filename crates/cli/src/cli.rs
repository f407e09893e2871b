// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::input::MessageSource;

/// Check a commit message against the Conventional Commits format
#[derive(Parser)]
#[command(name = "commit-lint")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  commit-lint \"feat(auth): add login\"
  git log -1 --pretty=%B | commit-lint
  commit-lint --file .git/COMMIT_EDITMSG")]
pub struct Cli {
    /// Commit message; words are joined with spaces (reads stdin when omitted)
    #[arg(
        value_name = "MESSAGE",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        conflicts_with = "file"
    )]
    pub message: Vec<String>,

    /// Read the commit message from a file
    #[arg(short = 'F', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Where the commit message comes from.
    pub fn source(&self) -> MessageSource {
        if let Some(path) = &self.file {
            MessageSource::File(path.clone())
        } else if self.message.is_empty() {
            MessageSource::Stdin
        } else {
            MessageSource::Args(self.message.clone())
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
