//! Roster adapter and name cleaning.

use crate::error::ConfigurationError;
use classkit_domain::roster::{Cell, TabularSource};

/// Looks up two equal-length columns and coerces them.
///
/// Names are converted with [`Cell::as_text`]; the second column goes through `coerce`.
///
/// # Errors
/// * [`ConfigurationError::MissingColumn`] if either column is absent (both names are reported).
/// * [`ConfigurationError::LengthMismatch`] if the columns differ in length.
pub fn extract_columns<S, T, F>(
    source: &S,
    name_column: &str,
    value_column: &str,
    coerce: F,
) -> Result<(Vec<String>, Vec<T>), ConfigurationError>
where
    S: TabularSource + ?Sized,
    F: Fn(&Cell) -> T,
{
    let (Some(names), Some(values)) = (source.column(name_column), source.column(value_column))
    else {
        return Err(ConfigurationError::MissingColumn {
            name_column: name_column.to_owned(),
            value_column: value_column.to_owned(),
            context: None,
        });
    };

    if names.len() != values.len() {
        return Err(ConfigurationError::LengthMismatch {
            name_column: name_column.to_owned(),
            value_column: value_column.to_owned(),
            names: names.len(),
            values: values.len(),
            context: None,
        });
    }

    let names = names.iter().map(|cell| cell.as_text().into_owned()).collect();
    let values = values.iter().map(coerce).collect();
    Ok((names, values))
}

/// Names plus excused flags (null counts as not excused).
pub fn excused_flags<S: TabularSource + ?Sized>(
    source: &S,
    name_column: &str,
    excused_column: &str,
) -> Result<(Vec<String>, Vec<bool>), ConfigurationError> {
    extract_columns(source, name_column, excused_column, Cell::is_truthy)
}

/// Names plus raw preference text (null counts as no preference).
pub fn preference_texts<S: TabularSource + ?Sized>(
    source: &S,
    name_column: &str,
    preference_column: &str,
) -> Result<(Vec<String>, Vec<String>), ConfigurationError> {
    extract_columns(source, name_column, preference_column, |cell| cell.as_text().into_owned())
}

/// Trims names and drops blank ones, keeping order and duplicates.
pub fn clean_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Trimmed name, or `None` when it is blank.
pub(crate) fn clean_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationErrorKind;
    use classkit_domain::roster::ColumnRoster;

    #[test]
    fn missing_column_names_both_columns() {
        let roster = ColumnRoster::new().with_column("student", ["Ada"]);

        let err = excused_flags(&roster, "name", "excused").unwrap_err();

        assert_eq!(err.kind(), ConfigurationErrorKind::MissingColumn);
        let message = err.to_string();
        assert!(message.contains("name") && message.contains("excused"), "{message}");
    }

    #[test]
    fn length_mismatch_is_reported() {
        let roster = ColumnRoster::new()
            .with_column("name", ["Ada", "Bert"])
            .with_column("excused", [false]);

        let err = excused_flags(&roster, "name", "excused").unwrap_err();

        assert!(matches!(err, ConfigurationError::LengthMismatch { names: 2, values: 1, .. }));
    }

    #[test]
    fn nulls_default_per_column_semantics() {
        let roster = ColumnRoster::new()
            .with_column("name", [Cell::from("Ada"), Cell::from(7)])
            .with_column("excused", [Cell::Null, Cell::from(true)])
            .with_column("preferences", [Cell::from("Health"), Cell::Null]);

        let (names, flags) = excused_flags(&roster, "name", "excused").unwrap();
        assert_eq!(names, vec!["Ada", "7"]);
        assert_eq!(flags, vec![false, true]);

        let (_, prefs) = preference_texts(&roster, "name", "preferences").unwrap();
        assert_eq!(prefs, vec!["Health".to_owned(), String::new()]);
    }

    #[test]
    fn cleaning_trims_and_drops_blanks() {
        let cleaned = clean_names(&[" ", "Alpha ", "", "\tBeta", "Alpha"]);
        assert_eq!(cleaned, vec!["Alpha", "Beta", "Alpha"]);
        assert_eq!(clean_name("  "), None);
        assert_eq!(clean_name(" Cleo "), Some("Cleo"));
    }
}
