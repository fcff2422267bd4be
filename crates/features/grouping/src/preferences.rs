//! Free-text topic preferences.

use fxhash::FxHashSet;

/// Literal substrings that separate topics in a preference cell.
///
/// Delimiters are matched as plain text, never as patterns. Empty delimiters are ignored.
/// When several delimiters match at the same position the one listed first wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Delimiters(Vec<String>);

impl Delimiters {
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(delimiters.into_iter().map(Into::into).filter(|d: &String| !d.is_empty()).collect())
    }

    /// No splitting: each cell is a single topic.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Parses a whitespace-separated delimiter list such as `"/ ;"`.
    ///
    /// Blank input falls back to the default comma.
    #[must_use]
    pub fn parse_list(raw: &str) -> Self {
        let parsed = Self::new(raw.split_whitespace());
        if parsed.is_empty() { Self::default() } else { parsed }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Splits `raw` at every occurrence of any delimiter.
    fn split<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let mut parts = Vec::new();
        let mut start = 0;
        let mut cursor = 0;

        while let Some(ch) = raw[cursor..].chars().next() {
            let rest = &raw[cursor..];
            if let Some(delimiter) = self.0.iter().find(|d| rest.starts_with(d.as_str())) {
                parts.push(&raw[start..cursor]);
                cursor += delimiter.len();
                start = cursor;
            } else {
                cursor += ch.len_utf8();
            }
        }
        parts.push(&raw[start..]);
        parts
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self(vec![",".to_owned()])
    }
}

/// Case-folded, deduplicated topics stated by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet(FxHashSet<String>);

impl PreferenceSet {
    /// Parses raw preference text.
    ///
    /// Blank text gives an empty set. Without delimiters the whole trimmed text is one topic.
    /// Otherwise every segment is trimmed and lowercased and empty segments are dropped.
    ///
    /// ```rust
    /// use classkit_grouping::preferences::{Delimiters, PreferenceSet};
    ///
    /// let set = PreferenceSet::parse("Urban / Housing", &Delimiters::new(["/"]));
    /// assert!(set.contains("urban") && set.contains("housing"));
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(raw: &str, delimiters: &Delimiters) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        if delimiters.is_empty() {
            return Self::from_iter([raw]);
        }
        Self::from_iter(delimiters.split(raw))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.0.contains(topic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Normalises each topic (trim + lowercase) and skips blanks.
impl<S: AsRef<str>> FromIterator<S> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|topic| topic.as_ref().trim().to_lowercase())
                .filter(|topic| !topic.is_empty())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(set: &PreferenceSet) -> Vec<&str> {
        let mut topics: Vec<&str> = set.iter().collect();
        topics.sort_unstable();
        topics
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(PreferenceSet::parse("", &Delimiters::default()).is_empty());
        assert!(PreferenceSet::parse("   \t", &Delimiters::default()).is_empty());
        assert!(PreferenceSet::parse(" ", &Delimiters::none()).is_empty());
    }

    #[test]
    fn no_delimiters_keeps_whole_text() {
        let set = PreferenceSet::parse("  Health, Policy ", &Delimiters::none());
        assert_eq!(topics(&set), vec!["health, policy"]);
    }

    #[test]
    fn comma_splits_only_at_commas() {
        let set = PreferenceSet::parse(
            "Health Policy, Bioethics, and Human Rights",
            &Delimiters::default(),
        );
        assert_eq!(topics(&set), vec!["and human rights", "bioethics", "health policy"]);
    }

    #[test]
    fn segments_are_folded_and_deduplicated() {
        let set = PreferenceSet::parse("Climate,, CLIMATE , climate,", &Delimiters::default());
        assert_eq!(topics(&set), vec!["climate"]);
    }

    #[test]
    fn delimiters_are_literal_text() {
        let set = PreferenceSet::parse("a.b|c.*d", &Delimiters::new([".*", "|"]));
        assert_eq!(topics(&set), vec!["a.b", "c", "d"]);
    }

    #[test]
    fn multiple_delimiters_and_multichar_delimiters() {
        let set = PreferenceSet::parse("Art and Music; Drama", &Delimiters::new([" and ", ";"]));
        assert_eq!(topics(&set), vec!["art", "drama", "music"]);
    }

    #[test]
    fn unicode_text_is_folded() {
        let set = PreferenceSet::parse("ÉCOLOGIE/Ökonomie", &Delimiters::new(["/"]));
        assert_eq!(topics(&set), vec!["écologie", "ökonomie"]);
    }

    #[test]
    fn list_parsing_falls_back_to_comma() {
        assert_eq!(Delimiters::parse_list("   "), Delimiters::default());
        assert_eq!(Delimiters::parse_list("/ ;").as_slice(), &["/".to_owned(), ";".to_owned()]);
        assert!(Delimiters::new([""]).is_empty());
    }
}
