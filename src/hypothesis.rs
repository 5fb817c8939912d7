//! The core library for the `Classifier` trait.
use crate::{Example, Sample};


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier {
    /// Predicts the label of the given example.
    fn predict(&self, example: &Example) -> &str;


    /// Predicts the labels of all examples in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<&str> {
        sample.iter()
            .map(|example| self.predict(example))
            .collect::<Vec<_>>()
    }
}
