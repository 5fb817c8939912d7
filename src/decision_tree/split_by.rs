use rand::Rng;
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use fixedbitset::FixedBitSet;

use std::fmt;

use crate::Sample;
use super::distribution::ClassDistribution;
use super::domain::partition;


/// Scoring rules for choosing the splitting attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitBy {
    /// Information gain,
    /// the reduction of the label entropy by the split.
    InformationGain,
    /// An independent `Uniform[0, 1)` draw for each candidate.
    /// This rule ignores the data and serves as an uninformed baseline.
    Random,
}


impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InformationGain => "Information gain",
            Self::Random => "Random (uniform)",
        };

        write!(f, "{name}")
    }
}


impl SplitBy {
    /// Returns the importance of `attribute`
    /// for the examples at `indices`.
    /// 
    /// `SplitBy::Random` draws from `rng`;
    /// `SplitBy::InformationGain` never touches it.
    pub fn importance<R: Rng>(
        &self,
        sample:    &Sample,
        indices:   &[usize],
        attribute: usize,
        rng:       &mut R,
    ) -> f64
    {
        match self {
            Self::InformationGain => {
                information_gain(sample, indices, attribute)
            },
            Self::Random => {
                Uniform::new(0f64, 1f64).sample(rng)
            },
        }
    }


    /// Returns the pair of the best attribute in `candidates`
    /// and its importance.
    /// Candidates are scanned in ascending order and
    /// only a strictly greater score replaces the current best,
    /// so the smallest attribute wins a tie.
    /// Returns `None` if `candidates` is empty.
    pub(super) fn best_attribute<R: Rng>(
        &self,
        sample:     &Sample,
        indices:    &[usize],
        candidates: &FixedBitSet,
        rng:        &mut R,
    ) -> Option<(usize, f64)>
    {
        let scores = match self {
            Self::InformationGain => {
                candidates.ones()
                    .collect::<Vec<_>>()
                    .into_par_iter()
                    .map(|a| (a, information_gain(sample, indices, a)))
                    .collect::<Vec<_>>()
            },
            Self::Random => {
                candidates.ones()
                    .map(|a| {
                        (a, self.importance(sample, indices, a, &mut *rng))
                    })
                    .collect::<Vec<_>>()
            },
        };

        let mut best: Option<(usize, f64)> = None;
        for (attribute, score) in scores {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((attribute, score));
            }
        }
        best
    }
}


/// Returns the entropy `-Σ p log2(p)` of a probability distribution.
/// Zero probabilities contribute nothing.
/// ```
/// use miniid3::entropy;
/// assert_eq!(entropy(&[0.5, 0.5]), 1.0);
/// assert_eq!(entropy(&[1.0]), 0.0);
/// ```
pub fn entropy(distribution: &[f64]) -> f64 {
    distribution.iter()
        .map(|&p| if p <= 0f64 { 0f64 } else { -p * p.log2() })
        .sum::<f64>()
}


/// Returns the size-weighted entropy of the partitions
/// that splitting the examples at `indices` on `attribute` induces.
/// The partitions are taken over the values observed in `indices`.
/// 
/// The terms are summed in ascending order,
/// so two attributes that induce the same partition
/// get bit-identical remainders whatever their value names are.
pub fn remainder(sample: &Sample, indices: &[usize], attribute: usize)
    -> f64
{
    if indices.is_empty() { return 0f64; }

    let n_examples = indices.len() as f64;
    let mut terms = partition(sample, indices, attribute)
        .values()
        .map(|subset| {
            let weight = subset.len() as f64 / n_examples;
            weight * ClassDistribution::from_indices(sample, subset).entropy()
        })
        .collect::<Vec<_>>();
    terms.sort_by(f64::total_cmp);

    terms.into_iter().sum::<f64>()
}


/// Returns the information gain of splitting
/// the examples at `indices` on `attribute`.
/// The value is clamped at `0` to absorb round-off.
pub fn information_gain(
    sample:    &Sample,
    indices:   &[usize],
    attribute: usize,
) -> f64
{
    let before = ClassDistribution::from_indices(sample, indices).entropy();
    let after = remainder(sample, indices, attribute);

    (before - after).max(0f64)
}
