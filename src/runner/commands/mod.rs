use std::path::PathBuf;

use clap::Args;
use sortbench::{
    record::{ConsoleSink, StatPrintFormat, TsvLogSink},
    BenchError, BenchRunner, DataGenerator, Distribution,
};

pub mod compare;
pub mod report;
pub mod run;
pub mod sweep;

/// Where a trial's input comes from
#[derive(Args)]
pub struct TargetArgs {
    /// Size of the generated input
    #[arg(short = 's', long)]
    pub size: Option<usize>,
    /// Order of the generated input: random, sorted, reverse or nearly-sorted
    #[arg(short = 'o', long)]
    pub order: Option<String>,
    /// Read the input from a file (`n` followed by `n` integers)
    #[arg(long, conflicts_with_all = ["size", "order"])]
    pub input: Option<PathBuf>,
    /// Seed for the input generator
    #[arg(long)]
    pub seed: Option<u64>,
}

pub enum Target {
    Generated {
        size: usize,
        distribution: Option<Distribution>,
    },
    File(PathBuf),
}

impl TargetArgs {
    pub fn target(&self) -> anyhow::Result<Target> {
        let distribution = self
            .order
            .as_deref()
            .map(|o| o.parse::<Distribution>())
            .transpose()?;
        match (self.size, &self.input) {
            (Some(size), None) => Ok(Target::Generated { size, distribution }),
            (None, Some(path)) => Ok(Target::File(path.clone())),
            (Some(_), Some(_)) => Err(BenchError::InvalidArgument(
                "`--size` and `--input` are mutually exclusive".to_owned(),
            )
            .into()),
            (None, None) => Err(BenchError::InvalidArgument(
                "either `--size` or `--input` is required".to_owned(),
            )
            .into()),
        }
    }
}

/// Where results go besides the console
#[derive(Args)]
pub struct OutputArgs {
    /// Append results to a tab-separated result log
    #[arg(long)]
    pub log: Option<PathBuf>,
    /// Console statistics format
    #[arg(long, value_enum, default_value = "table")]
    pub format: StatPrintFormat,
}

impl OutputArgs {
    pub fn runner(&self, seed: Option<u64>) -> anyhow::Result<BenchRunner> {
        let mut runner = BenchRunner::new(DataGenerator::new(seed));
        runner.add_sink(Box::new(ConsoleSink::new(self.format)));
        if let Some(log) = &self.log {
            runner.add_sink(Box::new(TsvLogSink::open(log)?));
        }
        Ok(runner)
    }
}
