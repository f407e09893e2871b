use std::path::PathBuf;

/// commit-lint error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Message file could not be read
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read commit message from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Writing the report failed
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type using commit-lint Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Message is valid
    Success = 0,
    /// Message has one or more errors
    LintFailed = 1,
    /// Invalid command-line arguments (reported by clap)
    ArgumentError = 2,
    /// Internal or I/O error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Io { .. } | Error::Stdin(_) | Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
