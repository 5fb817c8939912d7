//! Exports the decision tree learner, the data types and the traits.
//! 
pub use crate::decision_tree::{
    // Learner
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    SplitBy,
    Branching,
};


pub use crate::sample::{
    Example,
    Sample,
    SampleReader,
};


pub use crate::hypothesis::Classifier;
pub use crate::learner::Learner;


pub use crate::research::{
    accuracy,
    CrossValidation,
};


pub use crate::error::{Error, Result};
