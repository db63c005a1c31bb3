//! Tests for the notebook document model

use std::fs;

use nbpair::notebook::{CellType, Notebook, NotebookError};
use tempfile::TempDir;

use crate::common;

fn load_sample(dir: &TempDir) -> Notebook {
    let path = dir.path().join("sample.ipynb");
    fs::write(&path, common::SAMPLE_NOTEBOOK).unwrap();
    Notebook::from_path(&path).unwrap()
}

#[test]
fn test_parse_sample_notebook() {
    let dir = TempDir::new().unwrap();
    let nb = load_sample(&dir);

    assert_eq!(nb.cells.len(), 4);
    assert_eq!(nb.nbformat, 4);
    assert_eq!(nb.nbformat_minor, 5);
}

#[test]
fn test_source_forms_join_to_text() {
    let dir = TempDir::new().unwrap();
    let nb = load_sample(&dir);

    // Line-list source
    assert_eq!(nb.cells[0].source.as_text(), "# Sample\nIntro text.\n");
    // Single-string source
    assert_eq!(nb.cells[3].source.as_text(), "print('hi')");
}

#[test]
fn test_subset_partitions_by_cell_type() {
    let dir = TempDir::new().unwrap();
    let nb = load_sample(&dir);

    let code = nb.subset(CellType::Code);
    let docs = nb.subset(CellType::Markdown);

    assert_eq!(code.cells.len(), 2);
    assert_eq!(code.cells[0].source.as_text(), "import json\n");
    assert_eq!(code.cells[1].source.as_text(), "print('hi')");

    assert_eq!(docs.cells.len(), 1);
    assert_eq!(docs.cells[0].source.as_text(), "# Sample\nIntro text.\n");

    // Raw cells land in neither subset
    assert!(code.cells.iter().all(|c| c.cell_type == CellType::Code));
    assert!(docs.cells.iter().all(|c| c.cell_type == CellType::Markdown));
}

#[test]
fn test_subset_preserves_metadata() {
    let dir = TempDir::new().unwrap();
    let nb = load_sample(&dir);

    let code = nb.subset(CellType::Code);
    let docs = nb.subset(CellType::Markdown);

    assert_eq!(code.metadata, nb.metadata);
    assert_eq!(docs.metadata, nb.metadata);
    assert_eq!(code.metadata, docs.metadata);
    assert_eq!(code.nbformat, nb.nbformat);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.ipynb");
    fs::write(&path, "not a notebook").unwrap();

    let err = Notebook::from_path(&path).unwrap_err();
    assert!(matches!(err, NotebookError::Parse { .. }));
    assert!(err.to_string().contains("invalid notebook JSON"));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.ipynb");

    let err = Notebook::from_path(&path).unwrap_err();
    assert!(matches!(err, NotebookError::Read { .. }));
}

#[test]
fn test_unknown_cell_type_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("odd.ipynb");
    fs::write(
        &path,
        r#"{"cells": [{"cell_type": "mystery", "metadata": {}, "source": "?"}], "metadata": {}, "nbformat": 4, "nbformat_minor": 5}"#,
    )
    .unwrap();

    let nb = Notebook::from_path(&path).unwrap();
    assert_eq!(nb.cells.len(), 1);
    assert!(nb.subset(CellType::Code).cells.is_empty());
    assert!(nb.subset(CellType::Markdown).cells.is_empty());
}
