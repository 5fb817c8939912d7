//! Extraction of the values each attribute takes.
use serde::{Serialize, Deserialize};

use std::slice;
use std::collections::{BTreeMap, BTreeSet};

use crate::{Error, Result, Sample};


/// The distinct values observed at each feature position
/// of a training sample.
/// The values of an attribute are kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDomains {
    domains: Vec<BTreeSet<String>>,
}


impl AttributeDomains {
    /// Collect the domain of every attribute over `sample`.
    /// Returns [`Error::NoTrainingData`] if `sample` is empty.
    pub fn extract(sample: &Sample) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::NoTrainingData);
        }

        let n_feature = sample.shape().1;
        let mut domains = vec![BTreeSet::new(); n_feature];
        for example in sample {
            let pairs = domains.iter_mut().zip(example.features());
            for (domain, value) in pairs {
                if !domain.contains(value) {
                    domain.insert(value.clone());
                }
            }
        }

        Ok(Self { domains })
    }


    /// Returns the number of attributes.
    #[inline]
    pub fn n_attributes(&self) -> usize {
        self.domains.len()
    }


    /// Returns the domain of `attribute`.
    /// 
    /// # Panics
    /// Panics if `attribute >= self.n_attributes()`.
    #[inline]
    pub fn values(&self, attribute: usize) -> &BTreeSet<String> {
        &self.domains[attribute]
    }


    /// Returns `true` if `value` was observed at `attribute`.
    #[inline]
    pub fn contains(&self, attribute: usize, value: &str) -> bool {
        self.domains.get(attribute)
            .is_some_and(|domain| domain.contains(value))
    }


    /// Returns an iterator over the domains in attribute order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, BTreeSet<String>> {
        self.domains.iter()
    }
}


/// Group `indices` by the value each example takes at `attribute`.
/// The keys of the returned map form the domain of `attribute`
/// over the examples in `indices`, so no group is empty.
pub(crate) fn partition<'a>(
    sample:    &'a Sample,
    indices:   &[usize],
    attribute: usize,
) -> BTreeMap<&'a str, Vec<usize>>
{
    let mut groups = BTreeMap::<&str, Vec<usize>>::new();
    for &i in indices {
        let value = sample[i].value(attribute);
        groups.entry(value).or_default().push(i);
    }
    groups
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy() -> Sample {
        Sample::from_pairs([
            (["a", "x"], "Yes"),
            (["a", "y"], "No"),
            (["c", "x"], "Yes"),
            (["b", "y"], "No"),
        ]).unwrap()
    }

    #[test]
    fn test_extract() {
        let domains = AttributeDomains::extract(&toy()).unwrap();
        assert_eq!(domains.n_attributes(), 2);

        let first = domains.values(0).iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        assert_eq!(first, vec!["a", "b", "c"]);
        assert!(domains.contains(1, "y"));
        assert!(!domains.contains(1, "z"));
        assert!(!domains.contains(5, "x"));
    }

    #[test]
    fn test_extract_empty() {
        let sample = Sample::new(Vec::new()).unwrap();
        let err = AttributeDomains::extract(&sample).unwrap_err();
        assert!(matches!(err, Error::NoTrainingData));
    }

    #[test]
    fn test_partition_uses_only_given_indices() {
        let sample = toy();
        let groups = partition(&sample, &[0, 1, 3], 0);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["a"], vec![0, 1]);
        assert_eq!(groups["b"], vec![3]);
        assert!(!groups.contains_key("c"));
    }
}
