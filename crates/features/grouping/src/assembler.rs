//! Greedy similarity-based group assembly.
//!
//! The remaining participants are shuffled once. Each group takes the first remaining
//! participant as its anchor and then repeatedly adds the remaining participant with the
//! highest average similarity to the members so far. Ties go to whoever comes first in
//! the shuffled order, so the outcome depends only on the generator's seed.
//!
//! This is a heuristic: it does not search for a globally optimal partition.

use crate::plan::GroupPlan;
use crate::similarity::SimilarityMatrix;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Partitions `0..matrix.len()` into groups following `plan`.
///
/// Every index lands in exactly one group and groups keep assembly order (anchor first).
/// If the plan asks for more participants than exist, assembly stops early and fewer
/// groups are returned.
pub fn assemble<R>(plan: &GroupPlan, matrix: &SimilarityMatrix, rng: &mut R) -> Vec<Vec<usize>>
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<usize> = (0..matrix.len()).collect();
    remaining.shuffle(rng);

    let mut groups = Vec::with_capacity(plan.len());
    for &target in plan {
        if remaining.is_empty() {
            break;
        }
        let anchor = remaining.remove(0);
        let mut group = Vec::with_capacity(target);
        group.push(anchor);

        while group.len() < target {
            let Some(position) = best_candidate(&remaining, &group, matrix) else { break };
            let chosen = remaining.remove(position);
            trace!(anchor, chosen, "Added participant to group");
            group.push(chosen);
        }
        groups.push(group);
    }
    groups
}

/// Position in `remaining` of the candidate with the strictly highest average
/// similarity to `members`; the earliest position wins ties.
fn best_candidate(remaining: &[usize], members: &[usize], matrix: &SimilarityMatrix) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, &candidate) in remaining.iter().enumerate() {
        let score = matrix.average_to(candidate, members);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((position, score));
        }
    }
    best.map(|(position, _)| position)
}
