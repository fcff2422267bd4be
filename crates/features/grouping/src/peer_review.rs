//! Round-robin peer review pairing.

use crate::roster::clean_names;
use crate::sampling::{seeded_rng, shuffle_then_cycle};
use classkit_domain::assignment::ReviewPair;
use tracing::instrument;

/// Pairs participants (individuals or teams) so everyone reviews exactly one other
/// participant and is reviewed exactly once.
///
/// The cleaned list is shuffled and each participant reviews its successor, the last
/// wrapping to the first. Fewer than two participants produce no pairs.
///
/// ```rust
/// use classkit_grouping::peer_review::match_peer_reviews;
///
/// let pairs = match_peer_reviews(&[" ", "Alpha", "", "Beta"], Some(1));
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].reviewer, pairs[1].reviewee);
/// ```
#[instrument(skip_all, fields(participants = participants.len()))]
pub fn match_peer_reviews<S: AsRef<str>>(participants: &[S], seed: Option<u64>) -> Vec<ReviewPair> {
    let cleaned = clean_names(participants);
    if cleaned.len() < 2 {
        return Vec::new();
    }

    let mut rng = seeded_rng(seed);
    shuffle_then_cycle(cleaned, &mut rng).into_iter().map(ReviewPair::from).collect()
}
