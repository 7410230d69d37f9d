use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

use crate::error::{BayesError, Result};

/// A probability distribution formed by observing and counting values.
///
/// Looking up a value that was never observed yields `0.0` and leaves the
/// distribution untouched.
#[derive(Debug, Clone)]
pub struct EmpiricalDistribution<K> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> Default for EmpiricalDistribution<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> EmpiricalDistribution<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a distribution and observes each of `initial` once, in order.
    pub fn from_observations<I: IntoIterator<Item = K>>(initial: I) -> Self {
        let mut dist = Self::new();
        for value in initial {
            dist.observe(value);
        }
        dist
    }

    pub fn observe(&mut self, value: K) {
        *match self.counts.entry(value) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(0),
        } += 1;
        self.total += 1;
    }

    pub fn probability(&self, value: &K) -> Result<f64> {
        if self.total == 0 {
            return Err(BayesError::DivisionUndefined);
        }
        Ok(self.count(value) as f64 / self.total as f64)
    }

    pub fn count(&self, value: &K) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct observed values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probabilities_sum_to_one() {
        let dist = EmpiricalDistribution::from_observations(["a", "b", "a", "c", "a", "b"]);
        let sum: f64 = dist.keys().map(|k| dist.probability(k).unwrap()).sum();

        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.total(), dist.keys().map(|k| dist.count(k)).sum::<usize>());
    }

    #[test]
    fn observe_counts() {
        let mut dist = EmpiricalDistribution::from_observations(["spam", "ham"]);
        dist.observe("spam");

        assert_eq!(dist.count(&"spam"), 2);
        assert!((dist.probability(&"spam").unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unseen_value_is_zero_and_not_registered() {
        let dist = EmpiricalDistribution::from_observations([1, 2]);
        assert_eq!(dist.probability(&7).unwrap(), 0.0);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn empty_distribution_is_undefined() {
        let dist: EmpiricalDistribution<&str> = EmpiricalDistribution::new();
        assert!(dist.is_empty());
        assert_eq!(dist.probability(&"x"), Err(BayesError::DivisionUndefined));
    }
}
