use serde::{Serialize, Deserialize};

/// A labeled example: a fixed-length tuple of categorical values
/// and the class label attached to it.
/// The fields cannot be modified once the example is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example {
    features: Vec<String>,
    label: String,
}

impl Example {
    /// Construct a new example from its feature values and label.
    /// ```
    /// use miniid3::Example;
    /// let example = Example::new(["sunny", "hot"], "No");
    /// assert_eq!(example.feature(1), Some("hot"));
    /// assert_eq!(example.label(), "No");
    /// ```
    pub fn new<F, S, L>(features: F, label: L) -> Self
        where F: IntoIterator<Item = S>,
              S: Into<String>,
              L: Into<String>,
    {
        let features = features.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        Self { features, label: label.into() }
    }

    /// Returns the feature values.
    #[inline]
    pub fn features(&self) -> &[String] {
        &self.features[..]
    }

    /// Returns the value at the `attribute`'th position,
    /// or `None` if the example is shorter than that.
    #[inline]
    pub fn feature(&self, attribute: usize) -> Option<&str> {
        self.features.get(attribute).map(String::as_str)
    }

    /// Returns the value at the `attribute`'th position.
    /// The caller guarantees `attribute < self.n_feature()`.
    #[inline]
    pub(crate) fn value(&self, attribute: usize) -> &str {
        &self.features[attribute]
    }

    /// Returns the class label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of features.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.features.len()
    }
}
