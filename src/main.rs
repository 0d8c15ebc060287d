//! Burnin - Lighting burn-in cycle runner
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use burnin::cli::RunDisplay;
use burnin::controller::HttpController;
use burnin::log::RunRecorder;
use burnin::{BurnInRunner, ProfileSequence, RunParameters};

/// Lighting burn-in cycle runner
///
/// Pushes each lighting profile step to the controller, then polls its
/// status every poll interval until the step period has elapsed. Repeats
/// for the requested number of cycles.
#[derive(Parser, Debug)]
#[command(name = "burnin", version, about)]
struct Cli {
    /// Base URL of the controller
    #[arg(long, default_value = "https://terrarium.local")]
    host: String,

    /// Number of light cycles
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    cycles: u32,

    /// Duration of each step in seconds
    #[arg(long, default_value_t = 900, value_parser = clap::value_parser!(u64).range(1..))]
    period: u64,

    /// Seconds between status polls
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval: u64,

    /// Light zone the steps are pushed to
    #[arg(long, default_value = "dome0")]
    zone: String,

    /// TOML file with `[[step]]` entries replacing the built-in sequence
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Directory for status history and progress.json (disabled if unset)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn run_parameters(&self) -> RunParameters {
        RunParameters::new(self.cycles, Duration::from_secs(self.period))
            .with_poll_interval(Duration::from_secs(self.poll_interval))
            .with_zone(&self.zone)
    }

    fn load_sequence(&self) -> Result<ProfileSequence> {
        self.profile.as_ref().map_or_else(
            || Ok(ProfileSequence::builtin()),
            |path| {
                ProfileSequence::from_path(path)
                    .with_context(|| format!("Failed to load profile from '{}'", path.display()))
            },
        )
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let sequence = cli.load_sequence()?;
    let params = cli.run_parameters();
    params.validate()?;

    let controller =
        HttpController::new(&cli.host).context("Failed to initialize HTTP client")?;

    let cycles = params.cycles;
    RunDisplay::new(cycles, sequence.len()).print_banner(controller.base_url(), &params);

    let mut runner = BurnInRunner::new(controller, params);
    if let Some(log_dir) = &cli.log_dir {
        let total_steps = u32::try_from(sequence.len()).context("Profile has too many steps")?;
        let recorder = RunRecorder::new(log_dir, cycles, total_steps)
            .with_context(|| format!("Failed to initialize run log in '{}'", log_dir.display()))?;
        runner = runner.with_recorder(recorder);
    }

    runner.run(&sequence).await?;
    Ok(())
}
