//! Cold-call selection with opt-outs.

use crate::error::ConfigurationError;
use crate::roster::{clean_name, excused_flags};
use crate::sampling::{sample_without_replacement, seeded_rng};
use classkit_domain::roster::TabularSource;
use tracing::{debug, instrument};

/// Options for [`cold_call_candidates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColdCallOptions {
    pub name_column: String,
    pub excused_column: String,
    /// Keep excused students in the pool.
    pub include_excused: bool,
    pub sample_size: usize,
    pub seed: Option<u64>,
}

impl Default for ColdCallOptions {
    fn default() -> Self {
        Self {
            name_column: "name".to_owned(),
            excused_column: "excused".to_owned(),
            include_excused: false,
            sample_size: 1,
            seed: None,
        }
    }
}

impl ColdCallOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the column holding student names"]
    pub fn name_column(mut self, column: impl Into<String>) -> Self {
        self.name_column = column.into();
        self
    }

    #[must_use = "Sets the column holding opt-out flags"]
    pub fn excused_column(mut self, column: impl Into<String>) -> Self {
        self.excused_column = column.into();
        self
    }

    #[must_use = "Sets whether excused students may be selected"]
    pub const fn include_excused(mut self, include: bool) -> Self {
        self.include_excused = include;
        self
    }

    #[must_use = "Sets how many students to select"]
    pub const fn sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    #[must_use = "Sets the seed for reproducible selection"]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Picks students to cold-call.
///
/// The pool is every non-blank name, minus excused students unless `include_excused` is set.
/// Returns `min(sample_size, pool size)` distinct names in random order; an empty pool
/// yields an empty selection.
///
/// # Errors
/// * [`ConfigurationError::InvalidSampleSize`] when `sample_size` is 0 (checked first).
/// * Column errors from [`excused_flags`].
#[instrument(skip_all, fields(sample_size = options.sample_size, include_excused = options.include_excused))]
pub fn cold_call_candidates<S: TabularSource + ?Sized>(
    roster: &S,
    options: &ColdCallOptions,
) -> Result<Vec<String>, ConfigurationError> {
    if options.sample_size < 1 {
        return Err(ConfigurationError::InvalidSampleSize {
            requested: options.sample_size,
            context: None,
        });
    }

    let (names, excused) = excused_flags(roster, &options.name_column, &options.excused_column)?;
    let pool: Vec<String> = names
        .iter()
        .zip(excused)
        .filter(|(_, is_excused)| options.include_excused || !is_excused)
        .filter_map(|(name, _)| clean_name(name).map(str::to_owned))
        .collect();
    debug!(roster = names.len(), pool = pool.len(), "Built eligibility pool");

    if pool.is_empty() {
        return Ok(Vec::new());
    }

    let mut rng = seeded_rng(options.seed);
    Ok(sample_without_replacement(pool, options.sample_size, &mut rng))
}
