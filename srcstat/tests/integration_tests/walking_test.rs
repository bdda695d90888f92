// tests/integration_tests/walking_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use srcstat::walk_tree;

#[test]
fn test_walk_reports_visibility() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let report = walk_tree(temp_dir.path())?;

    assert_eq!(report.paths.len(), 6, "hidden dir contents must not be listed");
    assert_eq!(report.hidden_files, 1, ".gitignore is listed and counted");
    assert_eq!(report.hidden_dirs, 1);
    assert_eq!(report.non_hidden_dirs, 1);

    assert!(
        report.paths.iter().all(|p| !p.to_string_lossy().contains(".git/")),
        "nothing under a hidden directory may appear in the path list"
    );
    Ok(())
}

#[test]
fn test_hidden_files_plus_visible_files_equals_listed() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "src/.env", b"SECRET=1\n")?;

    let report = walk_tree(temp_dir.path())?;

    let visible = report
        .paths
        .iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| !n.starts_with('.'))
        })
        .count();
    assert_eq!(report.hidden_files + visible, report.paths.len());
    assert_eq!(report.hidden_files, 2);
    Ok(())
}

#[test]
fn test_walk_order_is_stable() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let first = walk_tree(temp_dir.path())?;
    let second = walk_tree(temp_dir.path())?;
    assert_eq!(first.paths, second.paths);
    Ok(())
}
