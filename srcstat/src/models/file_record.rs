// src/models/file_record.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-file statistics produced by the scanner.
///
/// Line counters stay at zero for categories that are never opened for
/// reading. A trailing comment counts towards both `lines_code` and
/// `lines_comments`, so `lines_total` is not the sum of the other counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub ext: String,
    pub category: String,
    pub lines_total: usize,
    pub lines_code: usize,
    pub lines_comments: usize,
    pub lines_blank: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: PathBuf, ext: String, category: String) -> Self {
        Self {
            path,
            ext,
            category,
            lines_total: 0,
            lines_code: 0,
            lines_comments: 0,
            lines_blank: 0,
            digest: None,
        }
    }
}
