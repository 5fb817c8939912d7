//! Struct `Sample` represents a batch of labeled categorical examples.

// Provides a single labeled example.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use example::Example;
