// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message input.
//!
//! Messages come from CLI arguments, a file, or standard input. Bytes that
//! are not valid UTF-8 are replaced so any input still lints.

use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Where the commit message is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Positional arguments, joined with single spaces.
    Args(Vec<String>),
    /// A message file such as `.git/COMMIT_EDITMSG`.
    File(PathBuf),
    /// Standard input, read to EOF.
    Stdin,
}

impl MessageSource {
    /// Short label for logging.
    pub fn describe(&self) -> &'static str {
        match self {
            MessageSource::Args(_) => "arguments",
            MessageSource::File(_) => "file",
            MessageSource::Stdin => "stdin",
        }
    }
}

/// Read the commit message from `source`.
///
/// `stdin` is only consumed for [`MessageSource::Stdin`].
pub fn read_message(source: &MessageSource, mut stdin: impl Read) -> Result<String> {
    match source {
        MessageSource::Args(words) => Ok(words.join(" ")),
        MessageSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        MessageSource::Stdin => {
            let mut bytes = Vec::new();
            stdin.read_to_end(&mut bytes).map_err(Error::Stdin)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
