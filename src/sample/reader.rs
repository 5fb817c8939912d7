use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::error::{Error, Result};
use super::example::Example;
use super::sample_struct::Sample;

/// A struct that reads a whitespace-delimited text file to [`Sample`].
/// Each non-blank line holds one example;
/// all tokens except the last are the feature values
/// and the last token is the class label.
/// # Example
/// ```no_run
/// use miniid3::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/training.txt")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
}

impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None }
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name is not set. Use `SampleReader::file`.",
            )
        })?;
        let file = File::open(file)?;
        Sample::from_reader(BufReader::new(file))
    }
}

impl Sample {
    /// Read whitespace-delimited examples from a buffered reader.
    /// Blank lines are skipped.
    pub fn from_reader<R>(reader: R) -> Result<Self>
        where R: BufRead,
    {
        let mut examples = Vec::new();
        let mut n_feature = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let lineno = i + 1;

            let mut tokens = line.split_whitespace().collect::<Vec<_>>();
            if tokens.is_empty() { continue; }

            let label = match tokens.pop() {
                Some(label) if !tokens.is_empty() => label,
                _ => {
                    return Err(Error::Parse {
                        line: lineno,
                        message: format!(
                            "expected at least one feature and a label, \
                            got `{}`",
                            line.trim(),
                        ),
                    });
                },
            };

            let expected = *n_feature.get_or_insert(tokens.len());
            if tokens.len() != expected {
                return Err(Error::FeatureLengthMismatch {
                    expected,
                    found: tokens.len(),
                    line:  lineno,
                });
            }

            examples.push(Example::new(tokens, label));
        }

        Sample::new(examples)
    }
}
