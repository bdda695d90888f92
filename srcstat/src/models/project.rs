// src/models/project.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::FileRecord;

/// Aggregate statistics for one analysis run over one root directory.
///
/// `files` preserves the walk order. `category_counts` maps category name to
/// the number of files in it, so its values always sum to `files.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    pub files: Vec<FileRecord>,
    pub category_counts: BTreeMap<String, usize>,
    pub hidden_files: usize,
    pub hidden_dirs: usize,
    pub non_hidden_dirs: usize,
}

impl ProjectResult {
    #[inline]
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.len()
    }

    #[inline]
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.lines_total).sum()
    }

    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn comment_percentage(&self) -> f64 {
        let total: usize = self.files.iter().map(|f| f.lines_total).sum();
        if total == 0 {
            return 0.0;
        }
        let comments: usize = self.files.iter().map(|f| f.lines_comments).sum();
        (comments as f64 / total as f64) * 100.0
    }
}
