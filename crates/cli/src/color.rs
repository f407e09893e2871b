// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order, per output stream:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If the stream is not a TTY → no color
//!    - If CLAUDE_CODE, CODEX, CI, or CURSOR env var set → no color
//!    - Else → auto

use termcolor::ColorChoice;

/// Resolve color choice for one stream from CLI flags and environment variables.
///
/// Priority: flags > NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool, is_terminal: bool) -> ColorChoice {
    ColorEnv::from_env().choose(force, disable, is_terminal)
}

/// Color-related environment variables, read once per resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorEnv {
    pub no_color: bool,
    pub color: bool,
    pub agent: bool,
}

impl ColorEnv {
    pub fn from_env() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            color: std::env::var_os("COLOR").is_some(),
            agent: is_agent_environment(),
        }
    }

    pub fn choose(&self, force: bool, disable: bool, is_terminal: bool) -> ColorChoice {
        if disable {
            return ColorChoice::Never;
        }
        if force {
            return ColorChoice::Always;
        }
        if self.no_color {
            return ColorChoice::Never;
        }
        if self.color {
            return ColorChoice::Always;
        }
        if !is_terminal || self.agent {
            return ColorChoice::Never;
        }
        ColorChoice::Auto
    }
}

/// Check if running under a coding agent or CI.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for lint output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Red "error" label.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow "warning" label.
    pub fn warning() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Green success banner.
    pub fn success() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Blue informational text.
    pub fn info() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Blue));
        spec
    }

    /// Bold section label (e.g., "Message:").
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
