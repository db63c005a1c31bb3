//! Fixed directory layout for the conversion pipeline
//!
//! Source notebooks live under `<root>/raw`, generated artifacts under
//! `<root>/interim`, and the catalog at `<root>/interim/index.md`. The
//! layout is captured once at construction time; nothing mutates it later.

use std::path::{Path, PathBuf};

/// Directory holding source notebooks
pub const RAW_DIR: &str = "raw";

/// Directory holding generated artifacts
pub const INTERIM_DIR: &str = "interim";

/// Catalog filename inside the interim directory
pub const INDEX_FILE: &str = "index.md";

/// Immutable pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository root containing the raw and interim trees
    root: PathBuf,
}

impl Config {
    /// Create a configuration rooted at the given repository directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The repository root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for source notebooks
    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join(RAW_DIR)
    }

    /// Directory receiving per-notebook artifact folders
    #[must_use]
    pub fn interim_dir(&self) -> PathBuf {
        self.root.join(INTERIM_DIR)
    }

    /// Path of the generated catalog
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.interim_dir().join(INDEX_FILE)
    }
}
