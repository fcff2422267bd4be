//! Pairwise Jaccard similarity over preference sets.

use crate::preferences::PreferenceSet;

/// `|A ∩ B| / |A ∪ B|`, with two empty sets scoring 0.0.
///
/// Participants who stated nothing are treated as unmatched rather than identical,
/// so non-responders are never pulled together.
#[must_use]
pub fn jaccard(left: &PreferenceSet, right: &PreferenceSet) -> f64 {
    if left.is_empty() && right.is_empty() {
        return 0.0;
    }
    let (small, large) = if left.len() <= right.len() { (left, right) } else { (right, left) };
    let shared = small.iter().filter(|topic| large.contains(topic)).count();
    let union = left.len() + right.len() - shared;
    shared as f64 / union as f64
}

/// Dense, symmetric `n × n` similarity scores, built once per grouping call.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Computes every pair once and mirrors it; the diagonal is self-similarity
    /// (1.0 for a non-empty set, 0.0 for an empty one).
    #[must_use]
    pub fn from_preferences(preferences: &[PreferenceSet]) -> Self {
        let size = preferences.len();
        let mut scores = vec![0.0; size * size];
        for (i, left) in preferences.iter().enumerate() {
            for (j, right) in preferences.iter().enumerate().skip(i) {
                let score = jaccard(left, right);
                scores[i * size + j] = score;
                scores[j * size + i] = score;
            }
        }
        Self { size, scores }
    }

    /// Number of participants.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score between participants `i` and `j`, or `None` if either index is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.scores.get(i * self.size + j).copied()
    }

    /// Mean score of `candidate` against every member; 0.0 for no members.
    /// Out-of-range indices score 0.0.
    #[must_use]
    pub fn average_to(&self, candidate: usize, members: &[usize]) -> f64 {
        if members.is_empty() {
            return 0.0;
        }
        let total: f64 = members.iter().map(|&member| self.get(candidate, member).unwrap_or(0.0)).sum();
        total / members.len() as f64
    }
}
