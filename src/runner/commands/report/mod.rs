use std::path::PathBuf;

use clap::Parser;

use crate::{
    commands::sweep::{RESULTS_FILE, RUN_INFO_FILE},
    platform_info::RunInfo,
};

mod data;
mod printer;

/// Summarize a result log
#[derive(Parser)]
pub struct ReportArgs {
    /// The run id to report. Default to the latest run.
    pub run_id: Option<String>,
    /// Report an arbitrary result log instead of a sweep run
    #[arg(long, conflicts_with = "run_id")]
    pub file: Option<PathBuf>,
    #[arg(long, default_value = "sortbench-logs")]
    /// Directory holding one sub-directory per run
    pub logs_dir: PathBuf,
}

impl ReportArgs {
    fn find_log_dir(&self) -> anyhow::Result<PathBuf> {
        let log_dir = match &self.run_id {
            Some(run_id) => self.logs_dir.join(run_id),
            None => self.logs_dir.join("latest"),
        };
        if !log_dir.exists() {
            anyhow::bail!("Log dir not found: {}", log_dir.display());
        }
        Ok(log_dir)
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut printer = printer::MarkdownPrinter::new();
        let results = if let Some(file) = &self.file {
            printer.add(format!("# Benchmark results: {}\n\n", file.display()));
            file.clone()
        } else {
            let log_dir = self.find_log_dir()?;
            match RunInfo::load(&log_dir.join(RUN_INFO_FILE)) {
                Ok(info) => {
                    printer.add(format!("# [{}] Benchmark results summary\n\n", info.runid));
                    printer.add(format!(
                        "* host: {} ({})\n* seed: {}\n* rustc: {}\n\n",
                        info.platform.host, info.platform.cpu_model, info.seed, info.platform.rustc
                    ));
                }
                Err(e) => {
                    log::warn!("No run metadata in {}: {}", log_dir.display(), e);
                    printer.add("# Benchmark results summary\n\n");
                }
            }
            log_dir.join(RESULTS_FILE)
        };
        if !results.exists() {
            anyhow::bail!("Benchmark results not found: {}", results.display());
        }
        let raw_df = data::get_data(&results)?;
        printer.add("## Mean per input\n\n");
        printer.add_dataframe(&data::mean_per_cell(&raw_df)?)?;
        printer.add("\n## Per algorithm\n\n");
        printer.add_dataframe(&data::totals_per_algorithm(&raw_df)?)?;
        printer.dump();
        Ok(())
    }
}
