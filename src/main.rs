use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pymodscan::cli::{run_scan, Args};
use pymodscan::Config;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let mut config =
        Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.merge_cli(args.suffixes, args.json, args.sort);
    config.validate().context("Invalid --suffix")?;

    run_scan(&args.path, &config)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
