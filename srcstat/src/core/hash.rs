// src/core/hash.rs
use anyhow::{Context as _, Result, bail};
use std::fs::File;
use std::io::{BufReader, Read as _};
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;

/// Streaming content digest of a regular file, rendered as 16 hex digits.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * The path is not a regular file
pub fn file_digest(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("cannot open {} for hashing", path.display()))?;
    let meta = file
        .metadata()
        .with_context(|| format!("cannot stat {} for hashing", path.display()))?;
    if !meta.is_file() {
        bail!("not a regular file: {}", path.display());
    }

    let mut reader = BufReader::new(file);
    let mut hasher = Xxh3::new();
    let mut buf = [0_u8; 8192];
    loop {
        let n = reader
            .read(&mut buf)
            .with_context(|| format!("cannot read {} for hashing", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:016x}", hasher.digest()))
}
