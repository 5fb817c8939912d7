//! Provides the `Learner` trait.
use crate::{Sample, Result};


/// An interface for the algorithms that turn a training sample
/// into a hypothesis.
pub trait Learner {
    /// The hypothesis returned by [`Learner::fit`].
    type Hypothesis;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the settings of the learner as `(name, value)` pairs.
    /// By default, no information is reported.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Learns a hypothesis from `sample`.
    fn fit(&self, sample: &Sample) -> Result<Self::Hypothesis>;
}
