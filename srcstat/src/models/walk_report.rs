// src/models/walk_report.rs
use std::path::PathBuf;

/// What the tree walker found under one root: the visitable file paths in
/// walk order, plus visibility counters. Hidden files are listed; the
/// contents of hidden directories are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub paths: Vec<PathBuf>,
    pub hidden_files: usize,
    pub hidden_dirs: usize,
    pub non_hidden_dirs: usize,
}
