//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing commit-lint CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use assert_cmd::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the commit-lint binary
pub fn lint_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("commit-lint"));
    // Keep output deterministic regardless of the caller's environment
    cmd.env_remove("COLOR")
        .env_remove("NO_COLOR")
        .env_remove("COMMIT_LINT_LOG");
    cmd
}

/// Lint a message passed as a single argument
pub fn lint(message: &str) -> LintBuilder {
    LintBuilder::new().args(&[message])
}

/// Lint a message piped on stdin
pub fn lint_stdin(input: &str) -> LintBuilder {
    let mut builder = LintBuilder::new();
    builder.stdin = Some(input.to_string());
    builder
}

/// High-level lint builder for fluent test assertions
pub struct LintBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

#[allow(dead_code)]
impl LintBuilder {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Append command-line arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Place flags before the message arguments
    pub fn flags(mut self, flags: &[&str]) -> Self {
        let mut args: Vec<String> = flags.iter().map(|a| a.to_string()).collect();
        args.append(&mut self.args);
        self.args = args;
        self
    }

    /// Set an environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    /// Run with `-o json` and parse stdout
    pub fn json(self) -> LintJson {
        let output = self.flags(&["-o", "json"]).command().output().unwrap();
        LintJson::new(&output.stdout)
    }

    fn command(self) -> Command {
        let mut cmd = lint_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Parsed JSON output of a lint run
pub struct LintJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl LintJson {
    fn new(stdout: &[u8]) -> Self {
        let root = serde_json::from_slice(stdout).unwrap_or_else(|e| {
            panic!(
                "stdout should be valid JSON: {e}\n{}",
                String::from_utf8_lossy(stdout)
            )
        });
        Self { root }
    }

    pub fn valid(&self) -> bool {
        self.root["valid"].as_bool().expect("valid should be a bool")
    }

    /// Finding types of all errors, in order
    pub fn error_types(&self) -> Vec<String> {
        Self::types(&self.root["errors"])
    }

    /// Finding types of all warnings, in order
    pub fn warning_types(&self) -> Vec<String> {
        Self::types(&self.root["warnings"])
    }

    fn types(list: &serde_json::Value) -> Vec<String> {
        list.as_array()
            .expect("findings should be an array")
            .iter()
            .map(|f| f["type"].as_str().unwrap().to_string())
            .collect()
    }
}

/// Assertion helper for command output
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}
