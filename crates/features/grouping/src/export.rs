//! Text and CSV rendering of results.
//!
//! CSV output quotes fields containing a comma, a double quote or a line break
//! (RFC 4180), doubling embedded quotes. Every line, including the last, ends with `\n`.

use classkit_domain::assignment::{Group, ReviewPair, memberships};
use std::borrow::Cow;
use std::fmt::Write;

/// `name,group` rows with 1-based group numbers.
#[must_use]
pub fn groups_csv(groups: &[Group]) -> String {
    let mut out = String::from("name,group\n");
    for row in memberships(groups) {
        let _ = writeln!(out, "{},{}", csv_field(&row.name), row.group);
    }
    out
}

/// `reviewer,reviewee` rows.
#[must_use]
pub fn reviews_csv(pairs: &[ReviewPair]) -> String {
    let mut out = String::from("reviewer,reviewee\n");
    for pair in pairs {
        let _ = writeln!(out, "{},{}", csv_field(&pair.reviewer), csv_field(&pair.reviewee));
    }
    out
}

/// A single `name` column.
#[must_use]
pub fn names_csv<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::from("name\n");
    for name in names {
        let _ = writeln!(out, "{}", csv_field(name.as_ref()));
    }
    out
}

/// One `Group N: a, b` line per group.
#[must_use]
pub fn groups_text(groups: &[Group]) -> String {
    let mut out = String::new();
    for (index, group) in groups.iter().enumerate() {
        let _ = writeln!(out, "Group {}: {}", index + 1, group.join(", "));
    }
    out
}

/// One `a reviews b` line per pair.
#[must_use]
pub fn reviews_text(pairs: &[ReviewPair]) -> String {
    let mut out = String::new();
    for pair in pairs {
        let _ = writeln!(out, "{pair}");
    }
    out
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
