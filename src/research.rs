//! This directory provides some features for evaluating
//! a learned classifier on held-out examples.
//! - Accuracy over a test sample
//! - k-fold cross validation

/// Provides an iterator over training/test pairs.
pub mod cross_validation;

/// Defines the evaluation of classifiers.
pub mod evaluation;

pub use cross_validation::{CrossValidation, DEFAULT_N_FOLDS};
pub use evaluation::accuracy;
