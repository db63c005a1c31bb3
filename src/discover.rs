//! Notebook discovery
//!
//! Recursively enumerates notebook files under the raw directory.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

/// Extension identifying notebook files
pub const NOTEBOOK_EXT: &str = "ipynb";

/// Find all notebook files under `raw_dir`, recursively.
///
/// A nonexistent root yields an empty list, not an error. Unreadable
/// entries are skipped. Traversal order is not significant; the catalog
/// re-sorts its entries.
#[must_use]
pub fn find_notebooks(raw_dir: &Path) -> Vec<PathBuf> {
    if !raw_dir.exists() {
        return Vec::new();
    }

    WalkDir::new(raw_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == NOTEBOOK_EXT))
        .map(|entry| entry.into_path())
        .inspect(|path| debug!("discovered notebook {}", path.display()))
        .collect()
}
