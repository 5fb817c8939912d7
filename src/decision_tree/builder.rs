use crate::DecisionTree;
use super::dtree::Branching;
use super::split_by::SplitBy;

/// The seed of the random scoring rule set as default.
pub const DEFAULT_SEED: u64 = 1234;

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
/// 
/// # Example
/// 
/// ```
/// use miniid3::{
///     Branching,
///     DecisionTreeBuilder,
///     SplitBy,
/// };
/// let learner = DecisionTreeBuilder::new()
///     .split_by(SplitBy::InformationGain)
///     .branching(Branching::Observed)
///     .build();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    split_by:  SplitBy,
    branching: Branching,
    seed:      u64,
}

impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// split_by: SplitBy::InformationGain,
    /// branching: Branching::Observed,
    /// seed: DEFAULT_SEED == 1234,
    /// ```
    pub fn new() -> Self {
        Self {
            split_by:  SplitBy::InformationGain,
            branching: Branching::Observed,
            seed:      DEFAULT_SEED,
        }
    }

    /// Set the attribute scoring rule.
    /// See [`SplitBy`] for the rules.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }

    /// Set which attribute values get a branch.
    /// See [`Branching`].
    #[inline]
    pub fn branching(mut self, branching: Branching) -> Self {
        self.branching = branching;
        self
    }

    /// Set the seed of the random scoring rule.
    /// Only [`SplitBy::Random`] draws random numbers.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.split_by, self.branching, self.seed)
    }
}
