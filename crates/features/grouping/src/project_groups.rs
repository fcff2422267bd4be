//! Preference-driven project groups.

use crate::assembler::assemble;
use crate::error::ConfigurationError;
use crate::plan::Sizing;
use crate::preferences::{Delimiters, PreferenceSet};
use crate::roster::{clean_name, preference_texts};
use crate::sampling::seeded_rng;
use crate::similarity::SimilarityMatrix;
use classkit_domain::assignment::Group;
use classkit_domain::roster::TabularSource;
use tracing::{debug, instrument};

/// Options for [`form_preference_groups`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceGroupOptions {
    pub name_column: String,
    pub preference_column: String,
    pub sizing: Sizing,
    pub delimiters: Delimiters,
    pub seed: Option<u64>,
}

impl Default for PreferenceGroupOptions {
    fn default() -> Self {
        Self {
            name_column: "name".to_owned(),
            preference_column: "preferences".to_owned(),
            sizing: Sizing::default(),
            delimiters: Delimiters::default(),
            seed: None,
        }
    }
}

impl PreferenceGroupOptions {
    /// Options with default columns and delimiters and the given sizing.
    #[must_use]
    pub fn new(sizing: Sizing) -> Self {
        Self { sizing, ..Self::default() }
    }

    #[must_use = "Sets the column holding student names"]
    pub fn name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = column.into();
        self
    }

    #[must_use = "Sets the column holding preference text"]
    pub fn preference_column(mut self, column: impl Into<String>) -> Self {
        self.preference_column = column.into();
        self
    }

    #[must_use = "Sets the delimiters that separate topics"]
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    #[must_use = "Sets the seed for reproducible grouping"]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Groups students who share stated interests.
///
/// Rows with a blank name are dropped together with their preferences. The remaining
/// students are planned with [`Sizing::plan`], scored pairwise with Jaccard similarity
/// and assembled greedily. An empty cleaned roster yields no groups without validating
/// the sizing.
///
/// ```rust
/// use classkit_domain::roster::ColumnRoster;
/// use classkit_grouping::plan::Sizing;
/// use classkit_grouping::project_groups::{form_preference_groups, PreferenceGroupOptions};
///
/// let roster = ColumnRoster::new()
///     .with_column("name", ["Ava", "Blake", "Cory", "Drew"])
///     .with_column("preferences", ["Health, Policy", "Health", "Environment", "Environment, Climate"]);
///
/// let groups =
///     form_preference_groups(&roster, &PreferenceGroupOptions::new(Sizing::group_size(2)).seed(3))
///         .unwrap();
/// assert_eq!(groups.len(), 2);
/// ```
///
/// # Errors
/// Column errors from the roster adapter and sizing errors from [`Sizing::group_count`].
#[instrument(skip_all, fields(
    team_count = ?options.sizing.team_count,
    group_size = ?options.sizing.group_size,
    delimiters = options.delimiters.as_slice().len(),
))]
pub fn form_preference_groups<S: TabularSource + ?Sized>(
    roster: &S,
    options: &PreferenceGroupOptions,
) -> Result<Vec<Group>, ConfigurationError> {
    let (raw_names, raw_preferences) =
        preference_texts(roster, &options.name_column, &options.preference_column)?;

    let (names, preferences): (Vec<String>, Vec<PreferenceSet>) = raw_names
        .iter()
        .zip(&raw_preferences)
        .filter_map(|(name, raw)| {
            clean_name(name).map(|name| (name.to_owned(), PreferenceSet::parse(raw, &options.delimiters)))
        })
        .unzip();

    if names.is_empty() {
        return Ok(Vec::new());
    }

    let plan = options.sizing.plan(names.len())?;
    debug!(participants = names.len(), sizes = ?plan.sizes(), "Planned preference groups");

    let matrix = SimilarityMatrix::from_preferences(&preferences);
    let mut rng = seeded_rng(options.seed);
    let groups: Vec<Group> = assemble(&plan, &matrix, &mut rng)
        .into_iter()
        .map(|members| members.into_iter().map(|index| names[index].clone()).collect())
        .collect();
    Ok(groups)
}
