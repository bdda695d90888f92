// src/core/scanner.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufRead as _, BufReader};
use std::path::Path;
use tracing::{debug, error};

use crate::core::classify::{LineKind, classify_line};
use crate::core::hash::file_digest;
use crate::core::registry::{CATEGORY_CODE, CATEGORY_MARKUP, ExtensionRegistry};
use crate::models::FileRecord;
use crate::utils::file_extension;

/// Per-scan knobs. Digests are off by default; line counting is unaffected
/// either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub digests: bool,
}

/// Scans one file into a `FileRecord`.
///
/// Only code and markup files are opened; every other category keeps all
/// line counters at zero. Markup files track blank vs non-blank lines only.
/// Code files run each line through the classifier, and a trailing comment
/// increments both the code and the comment counter.
///
/// # Errors
///
/// This function may return an error if:
/// * A code or markup file cannot be opened
/// * A line cannot be read (I/O failure or invalid UTF-8 mid-file)
///
/// On error no partial record is returned.
pub fn scan_file(registry: &ExtensionRegistry, path: &Path) -> Result<FileRecord> {
    scan_file_with(registry, path, ScanOptions::default())
}

/// Same as [`scan_file`], with options. When `opts.digests` is set the
/// record additionally carries a content digest of the file.
///
/// # Errors
///
/// As [`scan_file`]; digest computation failures are also surfaced.
pub fn scan_file_with(
    registry: &ExtensionRegistry,
    path: &Path,
    opts: ScanOptions,
) -> Result<FileRecord> {
    let ext = file_extension(path);
    let category = registry.category(&ext).to_owned();
    let mut record = FileRecord::new(path.to_path_buf(), ext, category);

    if record.category == CATEGORY_CODE || record.category == CATEGORY_MARKUP {
        count_lines(registry, path, &mut record)?;
    }

    if opts.digests {
        record.digest = Some(file_digest(path)?);
    }

    debug!(path = %path.display(), category = %record.category, lines = record.lines_total, "scanned file");
    Ok(record)
}

fn count_lines(registry: &ExtensionRegistry, path: &Path, record: &mut FileRecord) -> Result<()> {
    let file = File::open(path).inspect_err(|e| {
        error!(path = %path.display(), "cannot open file: {e}");
    })
    .with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);

    let lang = registry.language(&record.ext).cloned().unwrap_or_default();
    let markup = record.category == CATEGORY_MARKUP;

    for line in reader.lines() {
        let line = line.with_context(|| format!("cannot read {}", path.display()))?;
        record.lines_total = record.lines_total.saturating_add(1);

        if markup {
            if line.trim().is_empty() {
                record.lines_blank = record.lines_blank.saturating_add(1);
            }
            continue;
        }

        match classify_line(&line, &lang) {
            LineKind::Blank => {
                record.lines_blank = record.lines_blank.saturating_add(1);
            }
            LineKind::Comment => {
                record.lines_comments = record.lines_comments.saturating_add(1);
            }
            LineKind::TrailingComment => {
                record.lines_code = record.lines_code.saturating_add(1);
                record.lines_comments = record.lines_comments.saturating_add(1);
            }
            LineKind::Code => {
                record.lines_code = record.lines_code.saturating_add(1);
            }
        }
    }

    Ok(())
}
