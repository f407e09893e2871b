// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message validation.
//!
//! Checks a single message against the conventional commit format and a
//! handful of length and casing rules. Validation is pure: nothing here
//! prints, the caller hands the [`LintReport`] to a reporter.
//!
//! Two findings end validation early: an empty message, and a title that
//! does not parse. Everything else accumulates so one run surfaces every
//! fixable problem.

pub mod finding;
pub mod parse;
pub mod rules;

pub use finding::{Finding, FindingKind, LintReport};
pub use parse::{ParsedTitle, parse_title};
pub use rules::Rules;

/// Validate a commit message against `rules`.
///
/// # Examples
///
/// ```
/// use commit_lint::lint::{Rules, validate};
///
/// let report = validate("feat(auth): add login", &Rules::default());
/// assert!(report.is_valid());
///
/// let report = validate("foo: add thing", &Rules::default());
/// assert!(!report.is_valid());
/// ```
pub fn validate(message: &str, rules: &Rules) -> LintReport {
    let mut report = LintReport::default();

    let message = message.trim();
    if message.is_empty() {
        report.error(FindingKind::EmptyMessage, "empty commit message");
        return report;
    }

    let lines: Vec<&str> = message.split('\n').collect();
    let title = lines[0];

    check_title_length(title, rules, &mut report);

    if title.ends_with('.') {
        report.error(
            FindingKind::TrailingPeriod,
            "title must not end with a period",
        );
    }

    let Some(parsed) = parse_title(title) else {
        tracing::trace!(title, "title does not match conventional format");
        report.error(
            FindingKind::InvalidFormat,
            format!(
                "invalid format. Use: <type>(<scope>): <description>\n  Allowed types: {}",
                rules.allowed_types_list()
            ),
        );
        return report;
    };

    tracing::trace!(
        commit_type = parsed.commit_type,
        scope = parsed.scope,
        breaking = parsed.breaking,
        "parsed title"
    );

    check_type(&parsed, rules, &mut report);
    check_scope(&parsed, rules, &mut report);
    check_description(parsed.description, rules, &mut report);
    check_mood(parsed.description, rules, &mut report);

    if lines.len() > 1 {
        check_body(&lines, rules, &mut report);
    }

    report
}

fn check_title_length(title: &str, rules: &Rules, report: &mut LintReport) {
    let len = title.chars().count();
    if len > rules.title_max_len {
        report.error(
            FindingKind::TitleTooLong,
            format!(
                "title too long ({len} characters). Maximum: {}",
                rules.title_max_len
            ),
        );
    } else if len > rules.title_recommended_len {
        report.warn(
            FindingKind::TitleLong,
            format!(
                "long title ({len} characters). Recommended: at most {}",
                rules.title_recommended_len
            ),
        );
    }
}

fn check_type(parsed: &ParsedTitle<'_>, rules: &Rules, report: &mut LintReport) {
    if !rules.is_type_allowed(parsed.commit_type) {
        report.error(
            FindingKind::InvalidType,
            format!(
                "type '{}' is not allowed.\n  Allowed types: {}",
                parsed.commit_type,
                rules.allowed_types_list()
            ),
        );
    }
}

fn check_scope(parsed: &ParsedTitle<'_>, rules: &Rules, report: &mut LintReport) {
    if let Some(scope) = parsed.scope
        && !rules.is_scope_common(scope)
    {
        report.warn(
            FindingKind::UncommonScope,
            format!(
                "scope '{scope}' is not common. Common scopes: {}",
                rules.common_scopes_hint()
            ),
        );
    }
}

fn check_description(description: &str, rules: &Rules, report: &mut LintReport) {
    if description.is_empty() {
        report.error(
            FindingKind::EmptyDescription,
            "description must not be empty",
        );
    } else if description.chars().count() < rules.description_min_len {
        report.error(
            FindingKind::DescriptionTooShort,
            format!(
                "description too short (minimum {} characters)",
                rules.description_min_len
            ),
        );
    } else if description.chars().next().is_some_and(char::is_uppercase) {
        report.error(
            FindingKind::UppercaseDescription,
            "description must not start with an uppercase letter",
        );
    }
}

fn check_mood(description: &str, rules: &Rules, report: &mut LintReport) {
    let Some(first_word) = description.split_whitespace().next() else {
        return;
    };
    let first_word = first_word.to_lowercase();
    if let Some(imperative) = rules.imperative_for(&first_word) {
        report.warn(
            FindingKind::PastTense,
            format!("use imperative mood: '{imperative}' instead of '{first_word}'"),
        );
    }
}

fn check_body(lines: &[&str], rules: &Rules, report: &mut LintReport) {
    if lines.get(1).is_some_and(|line| !line.is_empty()) {
        report.warn(
            FindingKind::MissingBlankLine,
            "a blank line is expected between title and body",
        );
    }

    for (idx, line) in lines.iter().enumerate().skip(2) {
        let len = line.chars().count();
        if len > rules.body_line_max_len {
            report.warn(
                FindingKind::BodyLineTooLong,
                format!("body line {} too long ({len} characters)", idx + 1),
            );
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
