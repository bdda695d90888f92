// src/core/aggregate.rs
use anyhow::Result;
use std::path::Path;
use tracing::{error, info};

use crate::core::registry::ExtensionRegistry;
use crate::core::scanner::{ScanOptions, scan_file_with};
use crate::core::walker::walk_tree;
use crate::models::ProjectResult;

/// Analyzes a directory tree into a `ProjectResult`.
///
/// Walks the tree, scans every listed file in walk order, and merges the
/// records: `files` keeps the walk order, `category_counts` is incremented
/// per record, and the walker's visibility counters are copied over.
///
/// # Errors
///
/// This function may return an error if:
/// * The tree walk fails
/// * Any file scan fails
///
/// The first failure aborts the whole aggregation; no partial result is
/// returned.
pub fn analyze(registry: &ExtensionRegistry, root: &Path) -> Result<ProjectResult> {
    analyze_with(registry, root, ScanOptions::default())
}

/// Same as [`analyze`], with scan options forwarded to every file scan.
///
/// # Errors
///
/// As [`analyze`].
pub fn analyze_with(
    registry: &ExtensionRegistry,
    root: &Path,
    opts: ScanOptions,
) -> Result<ProjectResult> {
    let report = walk_tree(root)?;

    let mut result = ProjectResult {
        files: Vec::with_capacity(report.paths.len()),
        hidden_files: report.hidden_files,
        hidden_dirs: report.hidden_dirs,
        non_hidden_dirs: report.non_hidden_dirs,
        ..ProjectResult::default()
    };

    for path in &report.paths {
        let record = scan_file_with(registry, path, opts).inspect_err(|e| {
            error!(path = %path.display(), "scan failed: {e}");
        })?;
        *result
            .category_counts
            .entry(record.category.clone())
            .or_insert(0) += 1;
        result.files.push(record);
    }

    info!(files = result.files.len(), "analyzed {}", root.display());
    Ok(result)
}
