// src/core/walker.rs
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

use crate::models::WalkReport;
use crate::utils::is_hidden;

/// Walks `root` depth-first and reports every visitable file.
///
/// A hidden directory (name starting with a dot) is counted and pruned:
/// nothing under it appears in the paths or in any counter. A hidden file is
/// counted but still listed. The root itself never contributes to the
/// directory counters, even when its own name starts with a dot. Entries are
/// visited in file-name order, so walking an unmodified tree twice yields
/// identical reports.
///
/// # Errors
///
/// The first error from the underlying directory traversal (permission
/// denied, broken symlink, missing root) aborts the walk; no partial report
/// is returned.
pub fn walk_tree(root: &Path) -> Result<WalkReport> {
    let mut report = WalkReport::default();

    let mut entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry =
            entry.with_context(|| format!("cannot traverse {}", root.display()))?;
        if entry.depth() == 0 {
            continue;
        }

        let hidden = is_hidden(&entry);
        if entry.file_type().is_dir() {
            if hidden {
                report.hidden_dirs = report.hidden_dirs.saturating_add(1);
                entries.skip_current_dir();
            } else {
                report.non_hidden_dirs = report.non_hidden_dirs.saturating_add(1);
            }
        } else {
            if hidden {
                report.hidden_files = report.hidden_files.saturating_add(1);
            }
            report.paths.push(entry.into_path());
        }
    }

    info!(
        root = %root.display(),
        files = report.paths.len(),
        hidden_files = report.hidden_files,
        hidden_dirs = report.hidden_dirs,
        non_hidden_dirs = report.non_hidden_dirs,
        "walked tree"
    );

    Ok(report)
}
