//! Results handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of one group, in assembly order.
pub type Group = Vec<String>;

/// One peer review assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewPair {
    pub reviewer: String,
    pub reviewee: String,
}

impl ReviewPair {
    pub fn new(reviewer: impl Into<String>, reviewee: impl Into<String>) -> Self {
        Self { reviewer: reviewer.into(), reviewee: reviewee.into() }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for ReviewPair {
    fn from((reviewer, reviewee): (A, B)) -> Self {
        Self::new(reviewer, reviewee)
    }
}

impl fmt::Display for ReviewPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} reviews {}", self.reviewer, self.reviewee)
    }
}

/// A flattened `(name, group number)` row; group numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub name: String,
    pub group: usize,
}

/// Flattens groups into membership rows, numbering groups from 1.
#[must_use]
pub fn memberships(groups: &[Group]) -> Vec<GroupMembership> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(index, group)| {
            group.iter().map(move |name| GroupMembership { name: name.clone(), group: index + 1 })
        })
        .collect()
}
