use fixedbitset::FixedBitSet;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{Error, Learner, Result, Sample};

use super::{
    distribution::ClassDistribution,
    domain::{AttributeDomains, partition},
    split_by::SplitBy,
    node::Node,
    classifier::DecisionTreeClassifier,
};

use std::fmt;
use std::collections::BTreeMap;


/// The attribute values that get a branch
/// when a node splits on an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branching {
    /// One branch per value observed
    /// in the examples that reach the node.
    Observed,
    /// One branch per value observed in the whole training sample.
    /// A value that no example at the node takes
    /// gets a leaf predicting the plurality label of the node.
    Exhaustive,
}


impl fmt::Display for Branching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Observed => "Observed values",
            Self::Exhaustive => "Training-sample domain",
        };

        write!(f, "{name}")
    }
}


/// The ID3 decision tree algorithm.  
/// Given a set of labeled categorical examples,
/// [`DecisionTree`] grows a tree greedily,
/// splitting each node on the attribute of highest importance
/// until the examples at a node share one label
/// or no attribute is left.
/// It outputs a [`DecisionTreeClassifier`].
///
/// [`DecisionTree`] is constructed 
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
/// 
/// # Example
/// ```
/// use miniid3::{
///     Classifier,
///     DecisionTreeBuilder,
///     Learner,
///     Sample,
/// };
/// 
/// let sample = Sample::from_pairs([
///     (["a", "x"], "Yes"),
///     (["a", "y"], "No"),
///     (["b", "x"], "Yes"),
///     (["b", "y"], "No"),
/// ]).unwrap();
/// 
/// let tree = DecisionTreeBuilder::new().build();
/// let f = tree.fit(&sample).unwrap();
/// 
/// let predictions = f.predict_all(&sample);
/// assert_eq!(predictions, sample.target());
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    split_by:  SplitBy,
    branching: Branching,
    seed:      u64,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(split_by: SplitBy, branching: Branching, seed: u64)
        -> Self
    {
        Self { split_by, branching, seed, }
    }


    /// Grow a tree over `sample`,
    /// splitting only on the attributes in `candidates`.
    /// If `sample` is empty, the tree is a leaf
    /// predicting the plurality label of `parent`.
    /// 
    /// Returns [`Error::NoTrainingData`]
    /// if both `sample` and `parent` are empty,
    /// and [`Error::UnknownAttribute`]
    /// if some candidate is not an attribute of `sample`.
    pub fn build(&self, sample: &Sample, candidates: &[usize], parent: &Sample)
        -> Result<Node>
    {
        let fallback = ClassDistribution::new(parent).plurality();
        if sample.is_empty() {
            return fallback.map(Node::leaf)
                .ok_or(Error::NoTrainingData);
        }

        let domains = AttributeDomains::extract(sample)?;
        let n_attributes = domains.n_attributes();
        let mut attributes = FixedBitSet::with_capacity(n_attributes);
        for &attribute in candidates {
            if attribute >= n_attributes {
                return Err(Error::UnknownAttribute {
                    attribute,
                    n_attributes,
                });
            }
            attributes.insert(attribute);
        }

        let root = self.grow_root(
            sample, &domains, attributes, fallback.unwrap_or_default()
        );
        Ok(root)
    }


    fn grow_root(
        &self,
        sample:     &Sample,
        domains:    &AttributeDomains,
        candidates: FixedBitSet,
        fallback:   &str,
    ) -> Node
    {
        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(self.seed);

        self.grow(sample, domains, indices, candidates, fallback, 0, &mut rng)
    }


    /// Grow the sub-tree for the examples at `indices`.
    /// `fallback` is the plurality label of the parent node.
    #[allow(clippy::too_many_arguments)]
    fn grow(
        &self,
        sample:     &Sample,
        domains:    &AttributeDomains,
        indices:    Vec<usize>,
        candidates: FixedBitSet,
        fallback:   &str,
        depth:      usize,
        rng:        &mut StdRng,
    ) -> Node
    {
        // No example takes the value of this branch.
        if indices.is_empty() {
            debug!(depth, label = fallback, "leaf (no example)");
            return Node::leaf(fallback);
        }

        let dist = ClassDistribution::from_indices(sample, &indices[..]);
        let plurality = dist.plurality().unwrap_or(fallback);

        if dist.is_pure() {
            debug!(depth, label = plurality, "leaf (pure)");
            return Node::leaf(plurality);
        }

        let best = self.split_by.best_attribute(
            sample, &indices[..], &candidates, rng
        );
        let Some((attribute, score)) = best else {
            debug!(depth, label = plurality, "leaf (no attribute left)");
            return Node::leaf(plurality);
        };
        debug!(
            depth,
            attribute,
            score,
            n_examples = indices.len(),
            "split"
        );

        let mut remaining = candidates;
        remaining.set(attribute, false);

        let mut groups = partition(sample, &indices[..], attribute);
        let groups = match self.branching {
            Branching::Observed => {
                groups.into_iter()
                    .map(|(value, ix)| (value.to_string(), ix))
                    .collect::<Vec<_>>()
            },
            Branching::Exhaustive => {
                domains.values(attribute)
                    .iter()
                    .map(|value| {
                        let ix = groups.remove(value.as_str())
                            .unwrap_or_default();
                        (value.clone(), ix)
                    })
                    .collect::<Vec<_>>()
            },
        };

        let branches = groups.into_iter()
            .map(|(value, ix)| {
                let child = self.grow(
                    sample,
                    domains,
                    ix,
                    remaining.clone(),
                    plurality,
                    depth + 1,
                    rng,
                );
                (value, child)
            })
            .collect::<BTreeMap<_, _>>();

        Node::branch(attribute, branches, plurality)
    }
}


impl Learner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;


    fn name(&self) -> &str {
        "ID3 Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Split by", format!("{}", self.split_by)),
            ("Branching", format!("{}", self.branching)),
            ("Seed", format!("{}", self.seed)),
        ]);
        Some(info)
    }


    /// Grow a tree over all attributes of `sample`.
    /// Returns [`Error::NoTrainingData`] if `sample` is empty.
    fn fit(&self, sample: &Sample) -> Result<Self::Hypothesis> {
        let domains = AttributeDomains::extract(sample)?;

        let mut candidates = FixedBitSet::with_capacity(domains.n_attributes());
        candidates.insert_range(..);

        let dist = ClassDistribution::new(sample);
        let fallback = dist.plurality().ok_or(Error::NoTrainingData)?;

        let root = self.grow_root(sample, &domains, candidates, fallback);
        let f = DecisionTreeClassifier::new(root, domains);

        info!(
            n_examples = sample.shape().0,
            depth = f.depth(),
            leaves = f.n_leaves(),
            "decision tree trained"
        );
        Ok(f)
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Split by:  {}\n\
            - Branching: {}\n\
            - Seed:      {}\n\
            ----------\
            ",
            self.split_by,
            self.branching,
            self.seed,
        )
    }
}
