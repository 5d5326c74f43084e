//! recall CLI - run the plan-learning agent on a toroidal grid.
//!
//! - `recall run` - simulate and report the learned plans
//! - `recall look` - show what the agent would perceive from a pose
//! - `recall config` - print the effective configuration

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use recall_core::{Heading, Pose, Simulation, WorldView};
use recall_world::GridWorld;

use crate::config::RunConfig;
use crate::report::RunReport;

#[derive(Parser)]
#[command(name = "recall")]
#[command(about = "Reward-driven plan learning on a toroidal grid", version)]
struct Cli {
    /// YAML run configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation
    Run {
        /// Override the number of ticks
        #[arg(long)]
        ticks: Option<u64>,

        /// Override the seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the percept seen from a pose
    Look {
        #[arg(long)]
        x: i32,

        #[arg(long)]
        y: i32,

        #[arg(long, value_enum, default_value_t = HeadingArg::East)]
        heading: HeadingArg,
    },

    /// Print the effective configuration as YAML
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeadingArg {
    East,
    South,
    West,
    North,
}

impl From<HeadingArg> for Heading {
    fn from(value: HeadingArg) -> Self {
        match value {
            HeadingArg::East => Heading::East,
            HeadingArg::South => Heading::South,
            HeadingArg::West => Heading::West,
            HeadingArg::North => Heading::North,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    if cli.json_logs {
        fmt().with_env_filter(filter).with_target(false).json().init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    let mut config = RunConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { ticks, seed, json } => {
            if let Some(ticks) = ticks {
                config.ticks = ticks;
            }
            if let Some(seed) = seed {
                config.engine.seed = seed;
            }
            run(&config, json)
        }
        Commands::Look { x, y, heading } => look(&config, Pose::new(x, y, heading.into())),
        Commands::Config => {
            let yaml = serde_yaml::to_string(&config).context("Failed to render config")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

fn run(config: &RunConfig, json: bool) -> Result<()> {
    let mut world = GridWorld::from_config(&config.world, config.engine.seed)
        .context("Failed to build world")?;
    let start = world.field().wrap_pose(config.start);
    let mut sim =
        Simulation::new(start, config.engine.clone()).context("Failed to build engine")?;

    tracing::info!(
        ticks = config.ticks,
        seed = config.engine.seed,
        width = world.field().width(),
        height = world.field().height(),
        "Starting simulation"
    );

    for _ in 0..config.ticks {
        sim.step(&mut world);
        let tick = sim.state.tick;
        if config.log_every > 0 && tick % config.log_every == 0 {
            tracing::info!(
                tick,
                plans = sim.engine.store().len(),
                score = sim.state.score,
                "progress"
            );
        }
    }

    let report = RunReport::new(&sim, &config.report);
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{out}");
    } else {
        report.print();
    }
    Ok(())
}

fn look(config: &RunConfig, pose: Pose) -> Result<()> {
    let world = GridWorld::from_config(&config.world, config.engine.seed)
        .context("Failed to build world")?;
    let pose = world.field().wrap_pose(pose);
    let percept = world.perceive(pose);
    println!(
        "({}, {}) facing {:?}: {:?}",
        pose.x,
        pose.y,
        pose.heading,
        percept.as_str()
    );
    Ok(())
}
