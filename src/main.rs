use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use foxfield::{
    scenario::ScenarioLoader,
    simulator::Simulator,
    snapshot::{SnapshotConfig, SnapshotWriter},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Predator-prey field simulation runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/meadow.yaml")]
    scenario: PathBuf,

    /// Override tick count (uses scenario default when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override snapshot interval in ticks (zero disables snapshots)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for snapshots
    #[arg(long, default_value = "snapshots")]
    snapshot_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let seed = cli.seed.unwrap_or(scenario.seed);
    let ticks = scenario.ticks(cli.ticks);
    let snapshot_writer = SnapshotWriter::new(SnapshotConfig {
        interval: cli
            .snapshot_interval
            .unwrap_or(scenario.snapshot_interval_ticks),
        output_dir: cli.snapshot_dir,
    });

    let mut simulator = Simulator::from_scenario(&scenario, seed)?;
    let mut last = simulator.summary();
    for _ in 0..ticks {
        if !simulator.is_viable() {
            println!(
                "Ecosystem no longer viable after {} ticks, stopping early.",
                simulator.tick()
            );
            break;
        }
        last = simulator.step();
        snapshot_writer.maybe_write(&scenario.name, &last)?;
    }

    let populations: Vec<String> = last
        .counts
        .iter()
        .map(|count| format!("{}: {}", count.name, count.alive))
        .collect();
    println!(
        "Scenario '{}' finished at tick {}. Populations: {}",
        scenario.name,
        last.tick,
        populations.join(", ")
    );
    Ok(())
}
