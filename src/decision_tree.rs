//! ID3 decision tree induction over categorical attributes.

/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the scoring functions for attribute selection.
pub mod split_by;

pub mod node;
pub mod domain;
pub mod distribution;


pub use builder::{DecisionTreeBuilder, DEFAULT_SEED};
pub use classifier::DecisionTreeClassifier;
pub use distribution::ClassDistribution;
pub use domain::AttributeDomains;
pub use dtree::{Branching, DecisionTree};
pub use node::Node;
pub use split_by::{
    SplitBy,
    entropy,
    remainder,
    information_gain,
};
