// src/main.rs
use anyhow::Result;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use srcstat::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "srcstat=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    run(&args)
}
