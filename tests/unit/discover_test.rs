//! Tests for notebook discovery

use std::fs;

use nbpair::discover::find_notebooks;
use tempfile::TempDir;

#[test]
fn test_nonexistent_root_yields_empty() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    assert!(find_notebooks(&missing).is_empty());
}

#[test]
fn test_finds_notebooks_recursively() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw");
    fs::create_dir_all(raw.join("nested/deeper")).unwrap();

    fs::write(raw.join("top.ipynb"), "{}").unwrap();
    fs::write(raw.join("nested/deeper/inner.ipynb"), "{}").unwrap();
    fs::write(raw.join("notes.txt"), "skip").unwrap();
    fs::write(raw.join("nested/readme.md"), "skip").unwrap();

    let mut found = find_notebooks(&raw);
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|p| p.extension().is_some_and(|e| e == "ipynb")));
    assert!(found.iter().any(|p| p.ends_with("top.ipynb")));
    assert!(found.iter().any(|p| p.ends_with("nested/deeper/inner.ipynb")));
}

#[test]
fn test_empty_raw_dir_yields_empty() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw");
    fs::create_dir_all(&raw).unwrap();

    assert!(find_notebooks(&raw).is_empty());
}
