// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in lint rules.
//!
//! Rules are immutable data handed to the validator. There is no config
//! file; `Rules::default()` is the only rule set the CLI uses.

/// Allowed conventional commit types.
pub const ALLOWED_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Scopes that are recommended. Others only produce a warning.
pub const COMMON_SCOPES: &[&str] = &[
    "auth",
    "api",
    "domain",
    "data",
    "config",
    "security",
    "migration",
    "dto",
    "validation",
    "exception",
    "docs",
    "service",
    "controller",
    "entity",
    "repository",
    "util",
];

/// Past-tense verbs that suggest a non-imperative description.
pub const PAST_TENSE_WORDS: &[&str] = &[
    "added",
    "fixed",
    "updated",
    "removed",
    "refactored",
    "implemented",
];

/// Title length above which the message is rejected.
pub const TITLE_MAX_LEN: usize = 72;

/// Title length above which a warning is issued.
pub const TITLE_RECOMMENDED_LEN: usize = 50;

/// Body line length above which a warning is issued.
pub const BODY_LINE_MAX_LEN: usize = 72;

/// Minimum description length.
pub const DESCRIPTION_MIN_LEN: usize = 3;

/// Number of common scopes listed in the uncommon-scope warning.
const SCOPE_HINT_COUNT: usize = 5;

/// The rule set a message is validated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub allowed_types: &'static [&'static str],
    pub common_scopes: &'static [&'static str],
    pub past_tense_words: &'static [&'static str],
    pub title_max_len: usize,
    pub title_recommended_len: usize,
    pub body_line_max_len: usize,
    pub description_min_len: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            allowed_types: ALLOWED_TYPES,
            common_scopes: COMMON_SCOPES,
            past_tense_words: PAST_TENSE_WORDS,
            title_max_len: TITLE_MAX_LEN,
            title_recommended_len: TITLE_RECOMMENDED_LEN,
            body_line_max_len: BODY_LINE_MAX_LEN,
            description_min_len: DESCRIPTION_MIN_LEN,
        }
    }
}

impl Rules {
    /// Check if the commit type is in the allowed list.
    pub fn is_type_allowed(&self, commit_type: &str) -> bool {
        self.allowed_types.contains(&commit_type)
    }

    /// Check if the scope is one of the common scopes.
    pub fn is_scope_common(&self, scope: &str) -> bool {
        self.common_scopes.contains(&scope)
    }

    /// Return the imperative suggestion for a past-tense first word.
    ///
    /// The suggestion drops the final character, so `added` suggests `adde`
    /// and `implemented` suggests `implemente`.
    pub fn imperative_for<'w>(&self, word: &'w str) -> Option<&'w str> {
        if !self.past_tense_words.contains(&word) {
            return None;
        }
        let mut chars = word.chars();
        chars.next_back();
        Some(chars.as_str())
    }

    /// Allowed types joined for display.
    pub fn allowed_types_list(&self) -> String {
        self.allowed_types.join(", ")
    }

    /// Leading common scopes joined for display, followed by an ellipsis.
    pub fn common_scopes_hint(&self) -> String {
        let shown: Vec<&str> = self
            .common_scopes
            .iter()
            .take(SCOPE_HINT_COUNT)
            .copied()
            .collect();
        format!("{}...", shown.join(", "))
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
