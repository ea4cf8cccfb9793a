mod bencher;
pub mod config;
pub mod data;
mod error;
pub mod input;
pub mod record;
pub mod sort;

pub use bencher::{BenchRunner, BenchTimer, Bencher, Comparison, SweepSummary, Trial, INPUT_ORDER};
pub use data::{generate, DataGenerator, Distribution, Sequence};
pub use error::{BenchError, Result};
pub use record::{BenchmarkResult, ResultSink};
pub use sort::{Algorithm, Comparisons, Sorter, SorterRegistry};
