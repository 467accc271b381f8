//! SplitMix64 CLI - deterministic draws from the command line.
//!
//! - `splitmix next -n 4` - raw 64-bit outputs
//! - `splitmix dice 3 6` - roll three six-sided dice
//! - `splitmix --state-file rng.state int 1 100` - continue a saved stream
//! - `splitmix state` - print the current state word

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use splitmix_core::{parse_state, SplitMix64};

mod commands;
mod config;
mod store;

use commands::{execute, Commands};
use config::CliConfig;
use store::StateStore;

#[derive(Parser)]
#[command(name = "splitmix")]
#[command(about = "Deterministic SplitMix64 draws", version)]
struct Cli {
    /// Project root directory
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Seed (decimal state word); takes precedence over the state file and config
    #[arg(short, long, global = true, value_parser = parse_seed)]
    seed: Option<u64>,

    /// File holding the state word between runs
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Emit JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn parse_seed(s: &str) -> std::result::Result<u64, String> {
    parse_state(s).map_err(|err| err.reason().to_owned())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stdout carries results)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Find project root
    let project_root = match cli.project.clone() {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut config = CliConfig::load_from_project(&project_root)?;
    config.resolve_paths(&project_root);

    let store = cli
        .state_file
        .clone()
        .or_else(|| config.state_file.clone())
        .map(StateStore::new);

    let seed = resolve_seed(cli.seed, store.as_ref(), &config)?;
    let mut rng = SplitMix64::new(seed);
    tracing::debug!(seed, project = %project_root.display(), "Generator seeded");

    let output = execute(&cli.command, &mut rng)?;

    if let Some(store) = &store {
        store.save(&rng)?;
    }

    if cli.json || config.json {
        println!("{}", output.to_json(&rng));
    } else {
        println!("{}", output.to_text());
    }
    Ok(())
}

/// `--seed`, then a saved state, then the configured seed, then 0.
fn resolve_seed(flag: Option<u64>, store: Option<&StateStore>, config: &CliConfig) -> Result<u64> {
    if let Some(seed) = flag {
        return Ok(seed);
    }
    if let Some(store) = store {
        if let Some(state) = store.load()? {
            tracing::debug!(path = %store.path().display(), "Resuming saved state");
            return Ok(state);
        }
    }
    Ok(config.seed.unwrap_or(0))
}
