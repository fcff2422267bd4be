//! Seeded random primitives.
//!
//! Every operation takes its own generator; nothing here touches shared random state,
//! so concurrent callers with their own seeds never interfere.

use crate::plan::GroupPlan;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Per-call generator.
///
/// Without a seed a fresh one is drawn from the thread generator and logged at `debug`,
/// so a surprising result can still be reproduced.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(|| {
        let drawn = rand::random();
        debug!(seed = drawn, "No seed supplied, drew a fresh one");
        drawn
    });
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shuffles `items` and cuts them into contiguous runs per `plan`.
pub fn shuffle_and_slice<T, R>(mut items: Vec<T>, plan: &GroupPlan, rng: &mut R) -> Vec<Vec<T>>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    plan.split(items)
}

/// Draws `min(count, pool.len())` distinct entries uniformly, in random order.
pub fn sample_without_replacement<T, R>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let count = count.min(pool.len());
    let (chosen, _) = pool.partial_shuffle(rng, count);
    chosen.to_vec()
}

/// Shuffles `items` and links each one to its successor, wrapping the last to the first.
///
/// Fewer than two items produce no links.
pub fn shuffle_then_cycle<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<(T, T)>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return Vec::new();
    }
    items.shuffle(rng);
    let successors = items.iter().cycle().skip(1).cloned();
    items.iter().cloned().zip(successors).collect()
}
