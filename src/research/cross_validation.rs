use rand::prelude::*;
use colored::Colorize;
use crate::Sample;


const WIDTH: usize = 9;

/// The number of folds set as default.
pub const DEFAULT_N_FOLDS: usize = 5;

/// A struct that generates 
/// pairs of training/test sample for k-fold cross validation.
/// The `i`'th fold tests on the `i`'th contiguous block of examples
/// and trains on the rest.
/// The last block also takes the examples left over
/// by the integer division.
/// # Example
/// ```no_run
/// use miniid3::{accuracy, train, CrossValidation, SampleReader};
///
/// let sample = SampleReader::default()
///     .file("/path/to/training.txt")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train_sample, test_sample) in cv {
///     let f = train(&train_sample).unwrap();
///     let acc = accuracy(&f, &test_sample).unwrap();
///     println!("[test accuracy: {acc}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds >= 2, "The number of folds must be at least 2.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let sample_size = self.ix.len();
        let test_size = sample_size / self.n_folds;
        let start = i * test_size;
        let end = if i + 1 == self.n_folds {
            sample_size
        } else {
            start + test_size
        };
        self.sample.split(&self.ix, start, end)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
