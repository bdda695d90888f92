// src/lib.rs
pub mod cli;
pub mod core;
pub mod export;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::aggregate::{analyze, analyze_with};
pub use crate::core::classify::{LineKind, classify_line};
pub use crate::core::hash::file_digest;
pub use crate::core::registry::{
    CATEGORY_CODE, CATEGORY_MARKUP, CATEGORY_UNKNOWN, ExtensionRegistry, LanguageConfig,
};
pub use crate::core::scanner::{ScanOptions, scan_file, scan_file_with};
pub use crate::core::walker::walk_tree;
pub use crate::export::{analyze_and_save, print_stats, render, save_stats};
pub use crate::models::{FileRecord, ProjectResult, WalkReport};
