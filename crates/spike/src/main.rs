use anyhow::Context;
use clap::Parser;
use pasture_core::config::GameConfig;
use pasture_core::world::World;
use std::fs;
use std::path::PathBuf;

/// Headless driver for the pasture simulation: runs a fixed number of
/// days at nominal tick timing and writes sampled metrics as JSON.
#[derive(Parser, Debug)]
#[command(name = "pasture")]
struct Args {
    /// Number of simulated days to run
    #[arg(long, default_value_t = 1000)]
    days: usize,

    /// Sample metrics every N days
    #[arg(long, default_value_t = 10)]
    sample_every: usize,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the run summary to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GameConfig {
        seed: args.seed,
        ..GameConfig::default()
    };
    let mut world = World::try_new(config).context("invalid game config")?;
    let summary = world
        .try_run_days(args.days, args.sample_every)
        .context("run failed")?;
    let json = serde_json::to_string_pretty(&summary).context("serializing run summary")?;
    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "ran {} days, wrote {} samples to {}",
                summary.days,
                summary.samples.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
