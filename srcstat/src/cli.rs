// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::registry::ExtensionRegistry;
use crate::core::scanner::ScanOptions;
use crate::export::analyze_and_save;
use crate::utils::absolute_dir;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to analyze (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// File to save the JSON result to (stdout is always printed)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Attach a content digest to every file record
    #[arg(long)]
    pub digests: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs one analysis: loads the built-in registries, resolves the target
/// directory, analyzes it, prints JSON to stdout and optionally saves it.
///
/// # Errors
///
/// This function may return an error if:
/// * The embedded registry documents cannot be parsed
/// * The directory cannot be traversed
/// * Any file scan fails
/// * The result cannot be rendered or saved
pub fn run(args: &Args) -> Result<()> {
    let registry = ExtensionRegistry::builtin().context("cannot load extension registry")?;

    let directory = absolute_dir(&args.directory)?;
    let opts = ScanOptions {
        digests: args.digests,
    };

    analyze_and_save(&registry, &directory, args.out.as_deref(), opts)
        .with_context(|| format!("failed to analyze {}", directory.display()))?;

    Ok(())
}
