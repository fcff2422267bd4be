//! Abstract roster access.
//!
//! A roster is anything that can hand out a named column as an ordered sequence of
//! [`Cell`]s. Spreadsheets, database rows or in-memory tables are adapted to
//! [`TabularSource`] by the caller; the grouping logic never sees the concrete backend.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// A single roster value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// String form of the value; `Null` becomes an empty string.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
        }
    }

    /// Flag interpretation used for opt-out columns.
    ///
    /// `Null` is `false`, numbers are `true` when non-zero, and text is `true` only for
    /// `true`, `yes`, `y` or `1` (trimmed, case-insensitive).
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => {
                let s = s.trim();
                ["true", "yes", "y", "1"].iter().any(|t| s.eq_ignore_ascii_case(t))
            },
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Column lookup by name.
///
/// Implementations return `None` when the column does not exist. Borrowing
/// implementations hand out `Cow::Borrowed`; adapters that have to materialise
/// values (e.g. over a columnar library) return `Cow::Owned`.
pub trait TabularSource {
    fn column(&self, name: &str) -> Option<Cow<'_, [Cell]>>;
}

impl<T: TabularSource + ?Sized> TabularSource for &T {
    fn column(&self, name: &str) -> Option<Cow<'_, [Cell]>> {
        (**self).column(name)
    }
}

impl<S: BuildHasher> TabularSource for HashMap<String, Vec<Cell>, S> {
    fn column(&self, name: &str) -> Option<Cow<'_, [Cell]>> {
        self.get(name).map(|values| Cow::Borrowed(values.as_slice()))
    }
}

impl TabularSource for BTreeMap<String, Vec<Cell>> {
    fn column(&self, name: &str) -> Option<Cow<'_, [Cell]>> {
        self.get(name).map(|values| Cow::Borrowed(values.as_slice()))
    }
}

/// In-memory struct-of-arrays roster.
///
/// ```rust
/// use classkit_domain::roster::{ColumnRoster, TabularSource};
///
/// let roster = ColumnRoster::new()
///     .with_column("name", ["Ada", "Bert"])
///     .with_column("excused", [false, true]);
///
/// assert_eq!(roster.column("name").map(|c| c.len()), Some(2));
/// assert!(roster.column("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnRoster {
    columns: FxHashMap<String, Vec<Cell>>,
}

impl ColumnRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a column, builder style.
    #[must_use]
    pub fn with_column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        self.insert_column(name, values);
        self
    }

    /// Adds (or replaces) a column and returns the previous values, if any.
    pub fn insert_column<I, V>(&mut self, name: impl Into<String>, values: I) -> Option<Vec<Cell>>
    where
        I: IntoIterator<Item = V>,
        V: Into<Cell>,
    {
        self.columns.insert(name.into(), values.into_iter().map(Into::into).collect())
    }

    /// Column names in unspecified order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl TabularSource for ColumnRoster {
    fn column(&self, name: &str) -> Option<Cow<'_, [Cell]>> {
        self.columns.get(name).map(|values| Cow::Borrowed(values.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coercion_matches_display() {
        assert_eq!(Cell::Null.as_text(), "");
        assert_eq!(Cell::from("Ada").as_text(), "Ada");
        assert_eq!(Cell::from(true).as_text(), "true");
        assert_eq!(Cell::from(42).as_text(), "42");
        assert_eq!(Cell::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn truthiness_is_conservative_for_text() {
        assert!(!Cell::Null.is_truthy());
        assert!(Cell::from(" Yes ").is_truthy());
        assert!(Cell::from("TRUE").is_truthy());
        assert!(Cell::from("1").is_truthy());
        assert!(!Cell::from("false").is_truthy());
        assert!(!Cell::from("excused?").is_truthy());
        assert!(Cell::from(2).is_truthy());
        assert!(!Cell::from(0.0).is_truthy());
    }

    #[test]
    fn options_map_none_to_null() {
        assert!(Cell::from(None::<&str>).is_null());
        assert_eq!(Cell::from(Some("x")), Cell::Text("x".to_owned()));
    }

    #[test]
    fn std_maps_are_sources() {
        let mut map: HashMap<String, Vec<Cell>> = HashMap::new();
        map.insert("name".to_owned(), vec![Cell::from("Ada")]);
        assert_eq!(map.column("name").as_deref(), Some(&[Cell::from("Ada")][..]));

        let tree: BTreeMap<String, Vec<Cell>> = BTreeMap::new();
        assert!(tree.column("name").is_none());
    }

    #[test]
    fn replacing_a_column_returns_previous_values() {
        let mut roster = ColumnRoster::new().with_column("name", ["Ada"]);
        let previous = roster.insert_column("name", ["Bert", "Cleo"]);
        assert_eq!(previous, Some(vec![Cell::from("Ada")]));
        assert_eq!(roster.column("name").map(|c| c.len()), Some(2));
    }
}
