use clap::{Parser, Subcommand};
use colored::Colorize;
use once_cell::sync::Lazy;

mod commands;
mod platform_info;

/// Benchmark insertion-family sorting algorithms across input distributions
#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Run(commands::run::RunArgs),
    Compare(commands::compare::CompareArgs),
    Sweep(commands::sweep::SweepArgs),
    Report(commands::report::ReportArgs),
}

static CMD_ARGS: Lazy<Cli> = Lazy::new(|| {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    Cli::parse()
});

fn main() -> anyhow::Result<()> {
    Lazy::force(&CMD_ARGS);
    env_logger::init();
    let result = match &CMD_ARGS.command {
        Commands::Run(cmd) => cmd.run(),
        Commands::Compare(cmd) => cmd.run(),
        Commands::Sweep(cmd) => cmd.run(),
        Commands::Report(cmd) => cmd.run(),
    };
    if let Err(err) = result {
        eprintln!("❌ {}: {}", "ERROR".red().bold(), err.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}
