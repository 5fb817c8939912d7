//! Label counts over a collection of examples.
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::Sample;
use super::split_by::entropy;


/// The number of examples of each class label.
/// Labels are kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDistribution<'a> {
    counts: BTreeMap<&'a str, usize>,
    total:  usize,
}


impl<'a> ClassDistribution<'a> {
    /// Count the labels of all examples in `sample`.
    pub fn new(sample: &'a Sample) -> Self {
        Self::from_labels(sample.iter().map(|example| example.label()))
    }


    /// Count the labels of the examples at `indices`.
    pub fn from_indices(sample: &'a Sample, indices: &[usize]) -> Self {
        Self::from_labels(indices.iter().map(|&i| sample[i].label()))
    }


    fn from_labels<I>(labels: I) -> Self
        where I: IntoIterator<Item = &'a str>
    {
        let mut counts = BTreeMap::new();
        let mut total = 0_usize;
        for label in labels {
            *counts.entry(label).or_insert(0_usize) += 1;
            total += 1;
        }
        Self { counts, total }
    }


    /// Returns the number of examples labeled as `label`.
    #[inline]
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }


    /// Returns the number of counted examples.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// Returns the number of distinct labels.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if every example has the same label.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.counts.len() == 1
    }


    /// Returns the relative frequency of each label,
    /// in ascending label order.
    pub fn probabilities(&self) -> Vec<f64> {
        let total = self.total as f64;
        self.counts.values()
            .map(|&count| count as f64 / total)
            .collect()
    }


    /// Returns the entropy (in bits) of the label frequencies.
    /// An empty distribution has zero entropy.
    #[inline]
    pub fn entropy(&self) -> f64 {
        entropy(&self.probabilities())
    }


    /// Returns the most frequent label.
    /// Ties are broken by the smallest label.
    /// Returns `None` if no example is counted.
    pub fn plurality(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;
        for (&label, &count) in self.counts.iter() {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }


    /// Returns an iterator over `(label, count)` pairs.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, &'a str, usize> {
        self.counts.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sample {
        Sample::from_pairs([
            (["1"], "b"),
            (["2"], "a"),
            (["3"], "b"),
            (["4"], "a"),
            (["5"], "c"),
        ]).unwrap()
    }

    #[test]
    fn test_counts() {
        let sample = sample();
        let dist = ClassDistribution::new(&sample);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.n_classes(), 3);
        assert_eq!(dist.get("a"), 2);
        assert_eq!(dist.get("z"), 0);
        assert!(!dist.is_pure());
        assert_eq!(dist.probabilities(), vec![0.4, 0.4, 0.2]);
    }

    #[test]
    fn test_plurality_breaks_ties_by_smallest_label() {
        let sample = sample();
        let dist = ClassDistribution::new(&sample);
        assert_eq!(dist.plurality(), Some("a"));

        let dist = ClassDistribution::from_indices(&sample, &[0, 2, 3]);
        assert_eq!(dist.plurality(), Some("b"));
    }

    #[test]
    fn test_empty_distribution() {
        let sample = sample();
        let dist = ClassDistribution::from_indices(&sample, &[]);
        assert_eq!(dist.plurality(), None);
        assert_eq!(dist.entropy(), 0f64);
        assert!(!dist.is_pure());
    }
}
