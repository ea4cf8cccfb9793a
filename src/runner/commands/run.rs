use std::path::PathBuf;

use clap::Parser;
use sortbench::input;

use super::{OutputArgs, Target, TargetArgs};

/// Benchmark one algorithm
#[derive(Parser)]
pub struct RunArgs {
    /// Algorithm name: insertion_sort, shell_sort or binary_insertion_sort
    pub algorithm: String,
    #[command(flatten)]
    pub target: TargetArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Write the sorted sequence to this file
    #[arg(long = "output")]
    pub output_sorted: Option<PathBuf>,
}

impl RunArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let target = self.target.target()?;
        let mut runner = self.output.runner(self.target.seed)?;
        let trial = match target {
            Target::Generated {
                size,
                distribution: None,
            } => {
                if self.output_sorted.is_some() {
                    anyhow::bail!("`--output` needs a single trial; pass `--order` as well");
                }
                runner.run_all_distributions(&self.algorithm, size)?;
                return Ok(());
            }
            Target::Generated {
                size,
                distribution: Some(distribution),
            } => runner.run_single(&self.algorithm, size, distribution)?,
            Target::File(path) => {
                let data = input::read_sequence(&path)?;
                runner.run_input(&self.algorithm, data)?
            }
        };
        if let Some(path) = &self.output_sorted {
            input::write_sequence(path, &trial.sorted)?;
            log::info!("Sorted sequence written to {}", path.display());
        }
        Ok(())
    }
}
