use clap::Parser;
use sortbench::input;

use super::{OutputArgs, Target, TargetArgs};

/// Benchmark two algorithms on the same input
#[derive(Parser)]
pub struct CompareArgs {
    /// First algorithm
    pub first: String,
    /// Second algorithm
    pub second: String,
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

impl CompareArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let target = self.target.target()?;
        let mut runner = self.output.runner(self.target.seed)?;
        let comparison = match target {
            Target::Generated {
                size,
                distribution: Some(distribution),
            } => runner.compare(&self.first, &self.second, size, distribution)?,
            Target::Generated {
                distribution: None, ..
            } => anyhow::bail!("`compare` needs `--order` together with `--size`"),
            Target::File(path) => {
                let data = input::read_sequence(&path)?;
                runner.compare_input(&self.first, &self.second, data)?
            }
        };
        let (a, b) = (&comparison.first.result, &comparison.second.result);
        println!(
            "{}: {} comparisons, {} ms",
            a.algorithm, a.comparisons, a.time_ms
        );
        println!(
            "{}: {} comparisons, {} ms",
            b.algorithm, b.comparisons, b.time_ms
        );
        Ok(())
    }
}
