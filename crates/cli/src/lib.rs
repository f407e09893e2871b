pub mod cli;
pub mod color;
pub mod error;
pub mod input;
pub mod lint;
pub mod output;

pub use cli::{Cli, OutputFormat};
pub use color::resolve_color;
pub use error::{Error, ExitCode, Result};
pub use input::{MessageSource, read_message};
pub use lint::{Finding, FindingKind, LintReport, Rules, validate};
pub use output::Reporter;
