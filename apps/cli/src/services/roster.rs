//! Plain-text roster formats accepted by the CLI.
//!
//! Lines are trimmed and blank lines are ignored in every format. Parsed rosters are
//! materialised as [`ColumnRoster`]s keyed by the configured column names so they go
//! through the same adapter as any other caller.

use classkit::domain::config::RosterColumns;
use classkit::domain::roster::ColumnRoster;

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// `name`, `names`, `"name"` or `"names"`, in any case.
fn is_name_header(line: &str) -> bool {
    let unquoted = line.strip_prefix('"').unwrap_or(line);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);
    unquoted.eq_ignore_ascii_case("name") || unquoted.eq_ignore_ascii_case("names")
}

/// One name per line; a leading `name`/`names` header is skipped.
#[must_use]
pub fn parse_names(text: &str) -> Vec<String> {
    let mut rows = lines(text).peekable();
    if rows.peek().is_some_and(|first| is_name_header(first)) {
        rows.next();
    }
    rows.map(str::to_owned).collect()
}

/// Header line followed by `name,excused` rows.
///
/// A row is excused only when its second field is `true` (any case). Rows without a
/// name are dropped.
#[must_use]
pub fn parse_cold_call(text: &str, columns: &RosterColumns) -> ColumnRoster {
    let (names, excused): (Vec<String>, Vec<bool>) = lines(text)
        .skip(1)
        .filter_map(|line| {
            let mut fields = line.split(',').map(str::trim);
            let name = fields.next().filter(|name| !name.is_empty())?;
            let excused = fields.next().is_some_and(|flag| flag.eq_ignore_ascii_case("true"));
            Some((name.to_owned(), excused))
        })
        .unzip();

    ColumnRoster::new()
        .with_column(columns.name_column.as_str(), names)
        .with_column(columns.excused_column.as_str(), excused)
}

/// `name,preferences` rows, split at the first comma.
///
/// The first line is a header when it mentions both "name" and "preference". A row
/// without a comma has no preferences; rows without a name are dropped.
#[must_use]
pub fn parse_preferences(text: &str, columns: &RosterColumns) -> ColumnRoster {
    let mut rows = lines(text).peekable();
    if rows.peek().is_some_and(|first| {
        let lower = first.to_lowercase();
        lower.contains("name") && lower.contains("preference")
    }) {
        rows.next();
    }

    let (names, preferences): (Vec<String>, Vec<String>) = rows
        .filter_map(|line| {
            let (name, preferences) = line.split_once(',').unwrap_or((line, ""));
            let name = name.trim();
            (!name.is_empty()).then(|| (name.to_owned(), preferences.trim().to_owned()))
        })
        .unzip();

    ColumnRoster::new()
        .with_column(columns.name_column.as_str(), names)
        .with_column(columns.preference_column.as_str(), preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classkit::domain::roster::{Cell, TabularSource};

    #[test]
    fn name_lists_skip_optional_header() {
        assert_eq!(parse_names("Names\nAda\n\n  Bert  \n"), vec!["Ada", "Bert"]);
        assert_eq!(parse_names("\"name\"\nAda"), vec!["Ada"]);
        assert_eq!(parse_names("Ada\nBert"), vec!["Ada", "Bert"]);
        assert!(parse_names("\n \n").is_empty());
    }

    #[test]
    fn cold_call_rows_use_configured_columns() {
        let columns = RosterColumns::default();
        let roster = parse_cold_call("name,excused\nAda,false\nBert, TRUE \n,true\nCleo\nDev,yes\n", &columns);

        let names = roster.column("name").unwrap();
        let excused = roster.column("excused").unwrap();
        assert_eq!(names.len(), 4);
        assert_eq!(names[1], Cell::from("Bert"));
        assert_eq!(
            excused.as_ref(),
            &[Cell::from(false), Cell::from(true), Cell::from(false), Cell::from(false)]
        );
    }

    #[test]
    fn preference_rows_split_at_first_comma() {
        let columns = RosterColumns::default();
        let roster = parse_preferences(
            "Name,Preferences\nAva,Health, Policy\nBlake\n , Art\nCory , Environment \n",
            &columns,
        );

        let names = roster.column("name").unwrap();
        let prefs = roster.column("preferences").unwrap();
        assert_eq!(names.as_ref(), &[Cell::from("Ava"), Cell::from("Blake"), Cell::from("Cory")]);
        assert_eq!(prefs.as_ref(), &[Cell::from("Health, Policy"), Cell::from(""), Cell::from("Environment")]);
    }

    #[test]
    fn preference_rows_without_header_keep_first_line() {
        let roster = parse_preferences("Ava,Health\nBlake,Health", &RosterColumns::default());
        assert_eq!(roster.column("name").map(|c| c.len()), Some(2));
    }
}
