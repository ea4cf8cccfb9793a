use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use crate::{
    config::Profile,
    data::{DataGenerator, Distribution, Sequence},
    error::{BenchError, Result},
    record::{BenchmarkResult, ResultSink, Sinks},
    sort::{Sorter, SorterRegistry},
};

/// Data order label for sequences loaded from a file.
pub const INPUT_ORDER: &str = "input";

/// Wall-clock timer for a single timed region.
#[derive(Default)]
pub struct Bencher {
    elapsed: Cell<Option<Duration>>,
}

pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        let previous = self.bencher.elapsed.replace(Some(elapsed));
        assert!(previous.is_none(), "More than one benchmark timer detected");
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing. The elapsed time is recorded when the returned guard is dropped.
    pub fn start_timing(&self) -> BenchTimer {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Take the last recorded time, leaving the bencher ready for another region.
    pub fn take_elapsed(&self) -> Option<Duration> {
        self.elapsed.take()
    }
}

/// One completed trial: its result record and the sorted sequence.
#[derive(Debug, Clone)]
pub struct Trial {
    pub result: BenchmarkResult,
    pub sorted: Sequence,
}

/// Two trials run against identical copies of one input.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: Trial,
    pub second: Trial,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub completed: usize,
    pub failed: usize,
}

/// Sort `input` with `sorter`, timing only the sort call.
fn measure(sorter: &dyn Sorter, data_order: &str, mut input: Sequence) -> Trial {
    let bencher = Bencher::new();
    let comparisons = bencher.time(|| sorter.sort(&mut input));
    let elapsed = bencher.take_elapsed().unwrap_or_default();
    Trial {
        result: BenchmarkResult {
            data_order: data_order.to_owned(),
            size: input.len(),
            algorithm: sorter.name().to_owned(),
            comparisons: comparisons.count(),
            time_ms: elapsed.as_millis(),
        },
        sorted: input,
    }
}

/// Drives generation, sorting, timing and recording.
///
/// Trials run strictly one after another; each result reaches every sink
/// before the next trial starts.
pub struct BenchRunner {
    registry: SorterRegistry,
    generator: DataGenerator,
    sinks: Sinks,
}

impl BenchRunner {
    pub fn new(generator: DataGenerator) -> Self {
        Self {
            registry: SorterRegistry::default(),
            generator,
            sinks: Sinks::new(),
        }
    }

    pub fn with_registry(mut self, registry: SorterRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn add_sink(&mut self, sink: Box<dyn ResultSink>) {
        self.sinks.add(sink);
    }

    /// Run one algorithm once against `input` and record the result.
    pub fn run_trial(&mut self, algorithm: &str, data_order: &str, input: Sequence) -> Result<Trial> {
        let sorter = self.registry.get(algorithm)?;
        log::info!(
            "Running: {} | Data order: {} | Size: {}",
            algorithm,
            data_order,
            input.len()
        );
        let trial = measure(sorter, data_order, input);
        self.sinks.record(&trial.result)?;
        Ok(trial)
    }

    /// Generate one input and run one trial on it.
    pub fn run_single(
        &mut self,
        algorithm: &str,
        size: usize,
        distribution: Distribution,
    ) -> Result<Trial> {
        self.registry.get(algorithm)?;
        let input = self.generator.generate(size, distribution);
        let trial = self.run_trial(algorithm, distribution.label(), input)?;
        self.sinks.flush()?;
        Ok(trial)
    }

    /// One trial per distribution, each on freshly generated data.
    pub fn run_all_distributions(
        &mut self,
        algorithm: &str,
        size: usize,
    ) -> Result<Vec<BenchmarkResult>> {
        self.registry.get(algorithm)?;
        let mut results = vec![];
        for distribution in Distribution::ALL {
            let input = self.generator.generate(size, distribution);
            let trial = self.run_trial(algorithm, distribution.label(), input)?;
            results.push(trial.result);
        }
        self.sinks.flush()?;
        Ok(results)
    }

    /// Run one trial against a sequence loaded from a file.
    pub fn run_input(&mut self, algorithm: &str, input: Sequence) -> Result<Trial> {
        let trial = self.run_trial(algorithm, INPUT_ORDER, input)?;
        self.sinks.flush()?;
        Ok(trial)
    }

    /// Run two algorithms against copies of one generated input.
    pub fn compare(
        &mut self,
        first: &str,
        second: &str,
        size: usize,
        distribution: Distribution,
    ) -> Result<Comparison> {
        self.registry.get(first)?;
        self.registry.get(second)?;
        let input = self.generator.generate(size, distribution);
        self.compare_sequences(first, second, distribution.label(), input)
    }

    /// Run two algorithms against copies of a sequence loaded from a file.
    pub fn compare_input(&mut self, first: &str, second: &str, input: Sequence) -> Result<Comparison> {
        self.registry.get(first)?;
        self.registry.get(second)?;
        self.compare_sequences(first, second, INPUT_ORDER, input)
    }

    fn compare_sequences(
        &mut self,
        first: &str,
        second: &str,
        data_order: &str,
        input: Sequence,
    ) -> Result<Comparison> {
        // Copy before either sort touches the data
        let copy = input.clone();
        let first = self.run_trial(first, data_order, input)?;
        let second = self.run_trial(second, data_order, copy)?;
        self.sinks.flush()?;
        Ok(Comparison { first, second })
    }

    /// Run every size × distribution × algorithm combination in `profile`.
    ///
    /// Each (size, distribution) cell is generated once and every algorithm
    /// sorts its own copy, so counts within a cell are directly comparable.
    /// An unknown algorithm fails only its own trials.
    pub fn sweep(&mut self, profile: &Profile) -> Result<SweepSummary> {
        if let Some(seed) = profile.seed {
            self.generator = DataGenerator::new(Some(seed));
        }
        let mut summary = SweepSummary::default();
        for &size in &profile.sizes {
            for &distribution in &profile.distributions {
                let input = self.generator.generate(size, distribution);
                for algorithm in &profile.algorithms {
                    match self.run_trial(algorithm, distribution.label(), input.clone()) {
                        Ok(_) => summary.completed += 1,
                        Err(e @ BenchError::UnknownAlgorithm(_)) => {
                            log::error!("{}", e);
                            summary.failed += 1;
                        }
                        Err(e) => return Err(e),
                    }
                }
            }
        }
        self.sinks.flush()?;
        Ok(summary)
    }
}
