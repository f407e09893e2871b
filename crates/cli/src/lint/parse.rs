// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conventional commit title parsing.
//!
//! Parses titles in the format: `<type>(<scope>)!: <description>`
//! where scope and the breaking-change marker are optional.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for a conventional commit title.
///
/// Captures:
/// - `type`: one or more word characters (required)
/// - `scope`: word characters or hyphens inside parens (optional)
/// - `breaking`: `!` marker (optional)
/// - `description`: rest of the line after `": "` (required, non-empty)
#[allow(clippy::expect_used)]
static CONVENTIONAL_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>\w+)(?:\((?P<scope>[\w-]+)\))?(?P<breaking>!)?: (?P<description>.+)$",
    )
    .expect("valid regex")
});

/// A parsed conventional commit title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle<'a> {
    /// Commit type (e.g., "feat", "fix").
    pub commit_type: &'a str,
    /// Optional scope (e.g., "api", "auth").
    pub scope: Option<&'a str>,
    /// Whether the `!` breaking-change marker is present.
    pub breaking: bool,
    /// Commit description.
    pub description: &'a str,
}

/// Parse a title line as a conventional commit.
///
/// Returns `None` if the title does not match the format.
///
/// # Examples
///
/// ```
/// use commit_lint::lint::parse::parse_title;
///
/// let parsed = parse_title("feat(api)!: drop v1 endpoints").unwrap();
/// assert_eq!(parsed.commit_type, "feat");
/// assert_eq!(parsed.scope, Some("api"));
/// assert!(parsed.breaking);
///
/// assert!(parse_title("update stuff").is_none());
/// ```
pub fn parse_title(title: &str) -> Option<ParsedTitle<'_>> {
    let caps = CONVENTIONAL_TITLE.captures(title)?;

    // type and description are always present when the regex matches
    let commit_type = caps.name("type")?.as_str();
    let description = caps.name("description")?.as_str();

    Some(ParsedTitle {
        commit_type,
        scope: caps.name("scope").map(|m| m.as_str()),
        breaking: caps.name("breaking").is_some(),
        description,
    })
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
