use crate::{Classifier, Error, Result, Sample};


/// Returns the fraction of examples in `sample`
/// that `f` labels correctly.
/// Returns [`Error::EmptyTestSet`] if `sample` has no example.
/// ```
/// use miniid3::{accuracy, train, Sample};
/// let sample = Sample::from_pairs([
///     (["a", "x"], "Yes"),
///     (["a", "y"], "No"),
/// ]).unwrap();
/// let f = train(&sample).unwrap();
/// assert_eq!(accuracy(&f, &sample).unwrap(), 1.0);
/// ```
pub fn accuracy<C>(f: &C, sample: &Sample) -> Result<f64>
    where C: Classifier + ?Sized
{
    if sample.is_empty() {
        return Err(Error::EmptyTestSet);
    }

    let n_sample = sample.shape().0 as f64;
    let n_correct = sample.iter()
        .filter(|example| f.predict(example) == example.label())
        .count();

    Ok(n_correct as f64 / n_sample)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Example;

    struct Constant(&'static str);

    impl Classifier for Constant {
        fn predict(&self, _example: &Example) -> &str {
            self.0
        }
    }

    #[test]
    fn test_accuracy() {
        let sample = Sample::from_pairs([
            (["1"], "Yes"),
            (["2"], "No"),
            (["3"], "Yes"),
            (["4"], "Yes"),
        ]).unwrap();
        assert_eq!(accuracy(&Constant("Yes"), &sample).unwrap(), 0.75);
        assert_eq!(accuracy(&Constant("No"), &sample).unwrap(), 0.25);
        assert_eq!(accuracy(&Constant("Maybe"), &sample).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_on_empty_sample() {
        let sample = Sample::new(Vec::new()).unwrap();
        let err = accuracy(&Constant("Yes"), &sample).unwrap_err();
        assert!(matches!(err, Error::EmptyTestSet));
    }
}
