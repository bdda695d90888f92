// tests/integration_tests/edge_cases_test.rs
use super::common::create_test_file;
use anyhow::Result;
use srcstat::{ExtensionRegistry, analyze, walk_tree};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert!(result.files.is_empty());
    assert!(result.category_counts.is_empty());
    Ok(())
}

#[test]
fn test_only_hidden_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), ".secrets/key.pem", b"---\n")?;
    create_test_file(temp_dir.path(), ".profile", b"export PATH\n")?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files.len(), 1, "hidden files are reported");
    assert_eq!(result.hidden_files, 1);
    assert_eq!(result.hidden_dirs, 1);
    assert_eq!(result.non_hidden_dirs, 0);
    Ok(())
}

#[test]
fn test_extensionless_files_are_unknown() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "Makefile", b"all:\n\techo hi\n")?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].ext, "");
    assert_eq!(result.files[0].category, "unknown");
    assert_eq!(result.files[0].lines_total, 0, "unknown files are not opened");
    Ok(())
}

#[test]
fn test_uppercase_extensions_are_normalized() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "MAIN.GO", b"package main\n")?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files[0].ext, ".go");
    assert_eq!(result.files[0].category, "code");
    assert_eq!(result.files[0].lines_total, 1);
    Ok(())
}

#[test]
fn test_deeply_nested_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a/b/c/d/e/deep.rs", b"fn deep() {}\n")?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.non_hidden_dirs, 5);
    Ok(())
}

#[test]
fn test_hidden_dir_deep_in_tree_is_pruned() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "src/lib.rs", b"pub fn f() {}\n")?;
    create_test_file(temp_dir.path(), "src/.cache/entry.rs", b"fn cached() {}\n")?;
    let registry = ExtensionRegistry::builtin()?;

    let report = walk_tree(temp_dir.path())?;
    assert_eq!(report.paths.len(), 1);
    assert_eq!(report.hidden_dirs, 1);

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files.len(), 1);
    Ok(())
}

#[test]
fn test_file_with_no_trailing_newline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("last.py"), "x = 1")?;
    let registry = ExtensionRegistry::builtin()?;

    let result = analyze(&registry, temp_dir.path())?;
    assert_eq!(result.files[0].lines_total, 1);
    assert_eq!(result.files[0].lines_code, 1);
    Ok(())
}
