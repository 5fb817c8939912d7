use std::ops::Index;
use std::slice;
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use super::example::Example;

/// An ordered collection of labeled examples
/// that have the same number of features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    examples: Vec<Example>,
    n_feature: usize,
}

impl Sample {
    /// Construct a new [`Sample`] from examples.
    /// Returns [`Error::FeatureLengthMismatch`] if some example
    /// has a different number of features than the first one.
    /// 
    /// An empty vector yields an empty sample with no feature.
    pub fn new(examples: Vec<Example>) -> Result<Self> {
        let n_feature = examples.first()
            .map(Example::n_feature)
            .unwrap_or(0);

        let ragged = examples.iter()
            .position(|example| example.n_feature() != n_feature);
        if let Some(i) = ragged {
            return Err(Error::FeatureLengthMismatch {
                expected: n_feature,
                found:    examples[i].n_feature(),
                line:     i + 1,
            });
        }

        Ok(Self { examples, n_feature })
    }

    /// Construct a new [`Sample`] from `(features, label)` pairs.
    /// ```
    /// use miniid3::Sample;
    /// let sample = Sample::from_pairs([
    ///     (["a", "x"], "Yes"),
    ///     (["a", "y"], "No"),
    /// ]).unwrap();
    /// assert_eq!(sample.shape(), (2, 2));
    /// ```
    pub fn from_pairs<I, F, S, L>(pairs: I) -> Result<Self>
        where I: IntoIterator<Item = (F, L)>,
              F: IntoIterator<Item = S>,
              S: Into<String>,
              L: Into<String>,
    {
        let examples = pairs.into_iter()
            .map(|(features, label)| Example::new(features, label))
            .collect::<Vec<_>>();
        Self::new(examples)
    }

    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.n_feature)
    }

    /// Returns `true` if this sample has no example.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Returns a slice of the examples.
    #[inline]
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }

    /// Returns an iterator over the examples.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Example> {
        self.examples.iter()
    }

    /// Returns the labels in the order of examples.
    pub fn target(&self) -> Vec<&str> {
        self.examples.iter()
            .map(Example::label)
            .collect()
    }

    /// Returns the distinct labels in ascending order.
    pub fn unique_target(&self) -> Vec<&str> {
        self.examples.iter()
            .map(Example::label)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Split `self` into a training/test pair.
    /// The examples at `ix[start..end]` go to the test sample
    /// and the remaining ones go to the training sample.
    /// `end` is clipped to `ix.len()`.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        let end = end.min(ix.len());
        let start = start.min(end);

        let test_size = end - start;
        let mut train = Vec::with_capacity(ix.len() - test_size);
        let mut test = Vec::with_capacity(test_size);

        for (k, &i) in ix.iter().enumerate() {
            let example = self.examples[i].clone();
            if (start..end).contains(&k) {
                test.push(example);
            } else {
                train.push(example);
            }
        }

        let n_feature = self.n_feature;
        let train = Self { examples: train, n_feature };
        let test = Self { examples: test, n_feature };
        (train, test)
    }
}

impl Index<usize> for Sample {
    type Output = Example;
    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.examples[idx]
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a Example;
    type IntoIter = slice::Iter<'a, Example>;
    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
