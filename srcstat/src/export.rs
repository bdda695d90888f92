// src/export.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::core::aggregate::analyze_with;
use crate::core::registry::ExtensionRegistry;
use crate::core::scanner::ScanOptions;
use crate::models::ProjectResult;

/// Renders a result as pretty-printed JSON with the stable field names
/// (`files`, `category_counts`, `hidden_files`, `hidden_dirs`,
/// `non_hidden_dirs`; per file `path`, `ext`, `category`, `lines_total`,
/// `lines_code`, `lines_comments`, `lines_blank`).
///
/// # Errors
///
/// Fails when a file path is not representable in JSON.
pub fn render(result: &ProjectResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("cannot render result as JSON")
}

/// Prints the result to stdout as JSON.
///
/// # Errors
///
/// As [`render`].
pub fn print_stats(result: &ProjectResult) -> Result<()> {
    println!("{}", render(result)?);
    Ok(())
}

/// Writes the result to `path` as JSON.
///
/// # Errors
///
/// Fails when rendering fails or the file cannot be written.
pub fn save_stats(result: &ProjectResult, path: &Path) -> Result<()> {
    let data = render(result)?;
    fs::write(path, data).with_context(|| format!("cannot write {}", path.display()))?;
    info!(path = %path.display(), "saved result");
    Ok(())
}

/// Analyzes `root`, prints the result to stdout, and saves it to `out` when
/// given. Returns the result for further use.
///
/// # Errors
///
/// Fails when the analysis, rendering, or save fails.
pub fn analyze_and_save(
    registry: &ExtensionRegistry,
    root: &Path,
    out: Option<&Path>,
    opts: ScanOptions,
) -> Result<ProjectResult> {
    let result = analyze_with(registry, root, opts)?;
    print_stats(&result)?;
    if let Some(out) = out {
        save_stats(&result, out)?;
    }
    Ok(result)
}
