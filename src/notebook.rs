//! Notebook document model
//!
//! Minimal serde model of the nbformat v4 JSON document: an ordered list of
//! cells plus document-level metadata. Parsing is delegated to `serde_json`;
//! whatever the deserializer tolerates, this tool tolerates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors raised while loading a notebook
#[derive(Debug, Error)]
pub enum NotebookError {
    /// The notebook file could not be read
    #[error("failed to read notebook {path}: {source}")]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The notebook file is not valid notebook JSON
    #[error("invalid notebook JSON in {path}: {source}")]
    Parse {
        /// Path of the invalid file
        path: PathBuf,
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Kind of a notebook cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    /// Executable code cell
    Code,
    /// Markdown documentation cell
    Markdown,
    /// Raw passthrough cell
    Raw,
    /// Any cell kind this tool does not handle
    Other,
}

impl<'de> Deserialize<'de> for CellType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unrecognized kinds are carried as Other and dropped by subset()
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "code" => Self::Code,
            "markdown" => Self::Markdown,
            "raw" => Self::Raw,
            _ => Self::Other,
        })
    }
}

/// Cell source, stored by the format as either one string or a list of lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Single joined string
    Text(String),
    /// One string per line, newlines included
    Lines(Vec<String>),
}

impl Source {
    /// The cell source as one string
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.concat(),
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cell {
    /// Cell kind tag
    pub cell_type: CellType,
    /// Cell source text
    #[serde(default)]
    pub source: Source,
    /// Per-cell metadata, carried but never interpreted
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A notebook document: ordered cells plus shared metadata
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notebook {
    /// Ordered cell list
    #[serde(default)]
    pub cells: Vec<Cell>,
    /// Document-level metadata, preserved on every derived subset
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Major format version
    #[serde(default)]
    pub nbformat: u32,
    /// Minor format version
    #[serde(default)]
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Load and parse a notebook from disk
    pub fn from_path(path: &Path) -> Result<Self, NotebookError> {
        let bytes = fs::read(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| NotebookError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A new notebook holding only cells of `kind`, relative order and
    /// document metadata preserved
    #[must_use]
    pub fn subset(&self, kind: CellType) -> Self {
        Self {
            cells: self.cells.iter().filter(|c| c.cell_type == kind).cloned().collect(),
            metadata: self.metadata.clone(),
            nbformat: self.nbformat,
            nbformat_minor: self.nbformat_minor,
        }
    }
}
