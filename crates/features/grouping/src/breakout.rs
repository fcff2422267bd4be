//! Random breakout groups.

use crate::error::ConfigurationError;
use crate::plan::Sizing;
use crate::roster::clean_names;
use crate::sampling::{seeded_rng, shuffle_and_slice};
use classkit_domain::assignment::Group;
use tracing::{debug, instrument};

/// Shuffles the cleaned names and slices them into groups per `sizing`.
///
/// An empty (or all-blank) roster returns no groups without validating `sizing`.
///
/// ```rust
/// use classkit_grouping::breakout::make_breakout_groups;
/// use classkit_grouping::plan::Sizing;
///
/// let names = ["Ada", "Bert", "Cleo", "Deepak", "Evan", "Fatima"];
/// let groups = make_breakout_groups(&names, Sizing::teams(3), Some(1)).unwrap();
/// assert_eq!(groups.len(), 3);
/// assert!(groups.iter().all(|g| g.len() == 2));
/// ```
///
/// # Errors
/// Any sizing error from [`Sizing::group_count`].
#[instrument(skip_all, fields(participants = names.len(), team_count = ?sizing.team_count, group_size = ?sizing.group_size))]
pub fn make_breakout_groups<S: AsRef<str>>(
    names: &[S],
    sizing: Sizing,
    seed: Option<u64>,
) -> Result<Vec<Group>, ConfigurationError> {
    let cleaned = clean_names(names);
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    let plan = sizing.plan(cleaned.len())?;
    if plan.is_empty() {
        return Ok(Vec::new());
    }
    debug!(sizes = ?plan.sizes(), "Planned breakout groups");

    let mut rng = seeded_rng(seed);
    Ok(shuffle_and_slice(cleaned, &plan, &mut rng))
}
