#![warn(missing_docs)]

//! 
//! A crate that learns ID3 decision trees over categorical data.
//! 
//! Each example is a fixed-length tuple of categorical values
//! paired with a class label.
//! [`DecisionTree`] grows a tree greedily:
//! at each node it splits on the attribute with the highest
//! information gain, one branch per attribute value,
//! and stops when the examples share one label or
//! no attribute is left.
//! The learned [`DecisionTreeClassifier`] labels new examples,
//! and [`accuracy`] measures it on held-out examples.
//! 
//! [`Example`], [`Node`], [`AttributeDomains`] and
//! [`DecisionTreeClassifier`] implement `serde::Serialize` and
//! `serde::Deserialize`, so a learned tree can be stored
//! in whatever format the caller picks.
//! This crate itself never writes a serialized tree.
//! 
//! ```
//! use miniid3::{accuracy, classify, train, Example, Sample};
//! 
//! let sample = Sample::from_pairs([
//!     (["sunny", "high"],   "No"),
//!     (["sunny", "normal"], "Yes"),
//!     (["rainy", "high"],   "No"),
//!     (["rainy", "normal"], "Yes"),
//! ]).unwrap();
//! 
//! let tree = train(&sample).unwrap();
//! let example = Example::new(["sunny", "normal"], "Yes");
//! assert_eq!(classify(&tree, &example), "Yes");
//! assert_eq!(accuracy(&tree, &sample).unwrap(), 1.0);
//! ```

pub mod error;
pub mod sample;
pub mod hypothesis;
pub mod learner;
pub mod decision_tree;
pub mod research;
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    Example,
    Sample,
    SampleReader,
};

pub use hypothesis::Classifier;
pub use learner::Learner;

pub use decision_tree::{
    AttributeDomains,
    Branching,
    ClassDistribution,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    SplitBy,
    DEFAULT_SEED,
    entropy,
    information_gain,
    remainder,
};

pub use research::{
    accuracy,
    CrossValidation,
};


/// Learns a decision tree from `sample`
/// with the default settings of [`DecisionTreeBuilder`].
/// Returns [`Error::NoTrainingData`] if `sample` is empty.
pub fn train(sample: &Sample) -> Result<DecisionTreeClassifier> {
    DecisionTreeBuilder::new()
        .build()
        .fit(sample)
}


/// Returns the label that `tree` predicts for `example`.
/// See [`Node`] for the label returned
/// when `example` takes a value the tree has no branch for.
pub fn classify<'a>(tree: &'a DecisionTreeClassifier, example: &Example)
    -> &'a str
{
    tree.predict(example)
}
