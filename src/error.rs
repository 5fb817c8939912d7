//! Error types for training, classification and data loading.

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The training sample has no example.
    #[error("no training data: the training sample is empty")]
    NoTrainingData,

    /// The test sample given to an evaluator has no example.
    #[error("empty test set: cannot compute accuracy over zero examples")]
    EmptyTestSet,

    /// An example does not have as many features as the others.
    #[error(
        "feature length mismatch at line {line}: \
        expected {expected} features, found {found}"
    )]
    FeatureLengthMismatch {
        /// The number of features of the first example.
        expected: usize,
        /// The number of features of the offending example.
        found: usize,
        /// 1-based line (or position) of the offending example.
        line: usize,
    },

    /// A branch for the example's attribute value does not exist.
    #[error("attribute {attribute} has no branch for the value `{value}`")]
    UnseenValue {
        /// The splitting attribute of the branch node.
        attribute: usize,
        /// The value the example takes at `attribute`.
        value: String,
    },

    /// A candidate attribute index is out of range for the sample.
    #[error(
        "unknown attribute {attribute}: \
        the sample has {n_attributes} attributes"
    )]
    UnknownAttribute {
        /// The offending attribute index.
        attribute: usize,
        /// The number of attributes of the sample.
        n_attributes: usize,
    },

    /// A line of a data file cannot be read as an example.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// I/O failure while reading a data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoTrainingData;
        assert!(format!("{err}").contains("no training data"));

        let err = Error::EmptyTestSet;
        assert!(format!("{err}").contains("empty test set"));

        let err = Error::UnseenValue { attribute: 2, value: "z".into() };
        let msg = format!("{err}");
        assert!(msg.contains("attribute 2"));
        assert!(msg.contains("`z`"));

        let err = Error::FeatureLengthMismatch {
            expected: 3, found: 2, line: 7,
        };
        let msg = format!("{err}");
        assert!(msg.contains("line 7"));
        assert!(msg.contains("expected 3"));

        let err = Error::UnknownAttribute { attribute: 4, n_attributes: 2 };
        let msg = format!("{err}");
        assert!(msg.contains("unknown attribute 4"));
        assert!(msg.contains("2 attributes"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
