//! Group-count planning shared by breakout and preference grouping.

use crate::error::ConfigurationError;

/// Requested grouping: a team count, a group size, or both (they must agree).
///
/// ```rust
/// use classkit_grouping::plan::Sizing;
///
/// let plan = Sizing::group_size(3).plan(7).unwrap();
/// assert_eq!(plan.sizes(), &[3, 2, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sizing {
    pub team_count: Option<usize>,
    pub group_size: Option<usize>,
}

impl Sizing {
    #[must_use]
    pub const fn new(team_count: Option<usize>, group_size: Option<usize>) -> Self {
        Self { team_count, group_size }
    }

    #[must_use]
    pub const fn teams(team_count: usize) -> Self {
        Self { team_count: Some(team_count), group_size: None }
    }

    #[must_use]
    pub const fn group_size(group_size: usize) -> Self {
        Self { team_count: None, group_size: Some(group_size) }
    }

    #[must_use]
    pub const fn with_team_count(mut self, team_count: usize) -> Self {
        self.team_count = Some(team_count);
        self
    }

    #[must_use]
    pub const fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = Some(group_size);
        self
    }

    /// Number of groups to form for `population` participants.
    ///
    /// * size only: `ceil(population / group_size)` (0 for an empty population)
    /// * count only: `min(team_count, population)`
    /// * both: the count must equal `ceil(population / group_size)`
    ///
    /// # Errors
    /// [`ConfigurationError::MissingPlan`], [`ConfigurationError::InvalidPlan`] (a value below 1)
    /// or [`ConfigurationError::InconsistentPlan`].
    pub fn group_count(&self, population: usize) -> Result<usize, ConfigurationError> {
        if self.team_count.is_none() && self.group_size.is_none() {
            return Err(ConfigurationError::MissingPlan { context: None });
        }
        if self.team_count == Some(0) {
            return Err(ConfigurationError::InvalidPlan {
                message: "team_count must be at least 1".into(),
                context: None,
            });
        }
        if self.group_size == Some(0) {
            return Err(ConfigurationError::InvalidPlan {
                message: "group_size must be at least 1".into(),
                context: None,
            });
        }

        match (self.team_count, self.group_size) {
            (None, Some(size)) => Ok(population.div_ceil(size)),
            (Some(count), None) => Ok(count.min(population)),
            (Some(count), Some(size)) => {
                let expected = population.div_ceil(size);
                if expected != count {
                    return Err(ConfigurationError::InconsistentPlan {
                        population,
                        team_count: count,
                        group_size: size,
                        expected,
                        context: None,
                    });
                }
                Ok(count.min(population))
            },
            (None, None) => Err(ConfigurationError::MissingPlan { context: None }),
        }
    }

    /// Validates the sizing and derives the per-group target sizes.
    pub fn plan(&self, population: usize) -> Result<GroupPlan, ConfigurationError> {
        Ok(GroupPlan::even(population, self.group_count(population)?))
    }
}

/// Target size of each group, in order.
///
/// Sizes sum to the population and differ by at most one; earlier groups take the remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GroupPlan(Vec<usize>);

impl GroupPlan {
    /// Spreads `population` over `groups` groups. Zero groups yields an empty plan.
    #[must_use]
    pub fn even(population: usize, groups: usize) -> Self {
        if groups == 0 {
            return Self::default();
        }
        let base = population / groups;
        let remainder = population % groups;
        Self((0..groups).map(|i| if i < remainder { base + 1 } else { base }).collect())
    }

    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all target sizes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Cuts `items` into contiguous runs following the plan.
    ///
    /// Surplus items beyond [`GroupPlan::total`] are dropped; a short input yields
    /// shorter trailing groups and stops once the input is exhausted.
    pub fn split<T>(&self, items: Vec<T>) -> Vec<Vec<T>> {
        let mut items = items.into_iter();
        let mut groups = Vec::with_capacity(self.len());
        for &size in &self.0 {
            let group: Vec<T> = items.by_ref().take(size).collect();
            if group.is_empty() {
                break;
            }
            groups.push(group);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a GroupPlan {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationErrorKind;

    #[test]
    fn size_only_rounds_up() {
        assert_eq!(Sizing::group_size(3).group_count(7).unwrap(), 3);
        assert_eq!(Sizing::group_size(3).group_count(6).unwrap(), 2);
        assert_eq!(Sizing::group_size(3).group_count(0).unwrap(), 0);
    }

    #[test]
    fn count_only_is_capped_by_population() {
        assert_eq!(Sizing::teams(3).group_count(6).unwrap(), 3);
        assert_eq!(Sizing::teams(10).group_count(4).unwrap(), 4);
    }

    #[test]
    fn consistent_pair_is_accepted() {
        assert_eq!(Sizing::teams(3).with_group_size(3).group_count(7).unwrap(), 3);
    }

    #[test]
    fn inconsistent_pair_is_rejected() {
        let err = Sizing::teams(2).with_group_size(1).group_count(4).unwrap_err();
        assert!(matches!(err, ConfigurationError::InconsistentPlan { expected: 4, .. }));
    }

    #[test]
    fn missing_and_zero_values_are_rejected() {
        assert_eq!(
            Sizing::default().group_count(5).unwrap_err().kind(),
            ConfigurationErrorKind::MissingPlan
        );
        assert_eq!(Sizing::teams(0).group_count(5).unwrap_err().kind(), ConfigurationErrorKind::InvalidPlan);
        assert_eq!(
            Sizing::group_size(0).group_count(5).unwrap_err().kind(),
            ConfigurationErrorKind::InvalidPlan
        );
    }

    #[test]
    fn remainder_goes_to_earlier_groups() {
        assert_eq!(GroupPlan::even(7, 3).sizes(), &[3, 2, 2]);
        assert_eq!(GroupPlan::even(6, 3).sizes(), &[2, 2, 2]);
        assert_eq!(GroupPlan::even(2, 3).sizes(), &[1, 1, 0]);
        assert!(GroupPlan::even(5, 0).is_empty());
    }

    #[test]
    fn split_follows_plan() {
        let plan = GroupPlan::even(5, 2);
        assert_eq!(plan.split(vec![1, 2, 3, 4, 5]), vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(plan.split(vec![1, 2]), vec![vec![1, 2]]);
    }
}
