// src/utils.rs
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Returns the lowercased extension of a file name, including the leading
/// dot, or an empty string when the name contains no dot. The suffix starts
/// at the last dot, so `.gitignore` yields `".gitignore"` and `a.tar.gz`
/// yields `".gz"`.
#[must_use]
pub fn file_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match name.rfind('.') {
        Some(idx) => name[idx..].to_ascii_lowercase(),
        None => String::new(),
    }
}

#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

/// Resolves a possibly-relative directory against the current working
/// directory.
///
/// # Errors
///
/// Fails when the current working directory cannot be determined.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}
