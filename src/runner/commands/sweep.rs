use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;
use sortbench::{
    config::{self, Profile},
    record::{ConsoleSink, TsvLogSink},
    BenchRunner, DataGenerator,
};

use crate::platform_info::{RunInfo, PLATFORM_INFO};

/// File name of the result log inside a run's log directory.
pub const RESULTS_FILE: &str = "results.tsv";
/// File name of the run metadata inside a run's log directory.
pub const RUN_INFO_FILE: &str = "config.toml";

/// Run every size × order × algorithm combination of a profile
#[derive(Parser)]
pub struct SweepArgs {
    #[arg(long, default_value = config::DEFAULT_PROFILE)]
    /// Benchmarking profile
    pub profile: String,
    #[arg(long, default_value = "sortbench.toml")]
    /// Config file holding the profiles
    pub config: PathBuf,
    #[arg(long, default_value = "sortbench-logs")]
    /// Directory holding one sub-directory per run
    pub logs_dir: PathBuf,
    #[arg(long)]
    /// Seed for the input generator
    pub seed: Option<u64>,
    #[arg(short = 's', long = "size")]
    /// Input sizes, replacing the profile's list
    pub sizes: Vec<usize>,
}

impl SweepArgs {
    fn generate_runid(&self) -> String {
        let time = chrono::Local::now()
            .format("%Y-%m-%d-%a-%H%M%S")
            .to_string();
        let host = PLATFORM_INFO.host.clone();
        format!("{}-{}-{}", self.profile, host, time)
    }

    fn load_profile(&self) -> anyhow::Result<Profile> {
        let mut profile = config::load_profile(&self.config, &self.profile)?;
        // Command line overrides
        if self.seed.is_some() {
            profile.seed = self.seed;
        }
        if !self.sizes.is_empty() {
            profile.sizes = self.sizes.clone();
        }
        Ok(profile)
    }

    fn prepare_logs_dir(&self, run_id: &str) -> anyhow::Result<PathBuf> {
        let log_dir = self.logs_dir.join(run_id);
        let latest_log_dir = self.logs_dir.join("latest");
        std::fs::create_dir_all(&log_dir)?;
        if latest_log_dir.exists() || latest_log_dir.is_symlink() {
            if latest_log_dir.is_dir() && !latest_log_dir.is_symlink() {
                std::fs::remove_dir_all(&latest_log_dir)?;
            } else {
                std::fs::remove_file(&latest_log_dir)?;
            }
        }
        // The link is relative so the logs dir can be moved as a whole
        #[cfg(target_os = "windows")]
        std::os::windows::fs::symlink_dir(run_id, latest_log_dir)?;
        #[cfg(not(target_os = "windows"))]
        std::os::unix::fs::symlink(run_id, latest_log_dir)?;
        Ok(log_dir)
    }

    fn update_run_info_on_finish(&self, log_dir: &Path, mut info: RunInfo) -> anyhow::Result<()> {
        info.finish_timestamp_utc = Some(Utc::now().timestamp());
        info.save(&log_dir.join(RUN_INFO_FILE))
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut profile = self.load_profile()?;
        // Pin the seed so the run can be reproduced from its metadata
        let generator = DataGenerator::new(profile.seed);
        let seed = generator.seed();
        profile.seed = Some(seed);
        // Prepare logs dir and runid
        let run_id = self.generate_runid();
        let log_dir = self.prepare_logs_dir(&run_id)?;
        let info = RunInfo::new(run_id.clone(), &self.profile, seed, &profile);
        info.save(&log_dir.join(RUN_INFO_FILE))?;
        println!("RUNID: {}", run_id);
        println!("LOGS: {}", log_dir.display());
        // Run benchmarks
        let mut runner = BenchRunner::new(generator);
        runner.add_sink(Box::new(ConsoleSink::new(profile.format)));
        runner.add_sink(Box::new(TsvLogSink::open(log_dir.join(RESULTS_FILE))?));
        let summary = runner.sweep(&profile)?;
        self.update_run_info_on_finish(&log_dir, info)?;
        if summary.failed > 0 {
            log::warn!("{} trials failed", summary.failed);
        }
        println!(
            "Experiments completed: {} trials. Results saved in {}.",
            summary.completed,
            log_dir.join(RESULTS_FILE).display()
        );
        Ok(())
    }
}
