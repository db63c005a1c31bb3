//! Conversion pipeline for a single notebook
//!
//! Copies a source notebook into its slug-named interim folder and derives
//! the paired code and documentation artifacts. Every write is conditioned
//! on a content difference, so re-running on unchanged inputs is a no-op.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::config::Config;
use crate::notebook::{CellType, Notebook};
use crate::slug;
use crate::writer;

/// Suffix of the code artifact filename
const PY_ONLY_SUFFIX: &str = "-py-only.py";

/// Suffix of the documentation artifact filename
const MD_ONLY_SUFFIX: &str = "-md-only.md";

/// Second line of the code artifact header
const DO_NOT_EDIT: &str = "# Do not edit directly; edit the notebook instead and re-run conversion.";

/// Outcome of processing one notebook
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The notebook copy in the interim tree
    pub dest_notebook: PathBuf,
    /// Whether any file was created or updated
    pub changed: bool,
}

/// Paths of the code and documentation artifacts paired with a notebook.
///
/// Explicit suffixes make it obvious which file holds what:
/// `<slug>-py-only.py` and `<slug>-md-only.md`, siblings of the notebook.
#[must_use]
pub fn paired_paths(dest_notebook: &Path) -> (PathBuf, PathBuf) {
    let stem = dest_notebook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder = dest_notebook.parent().unwrap_or_else(|| Path::new(""));
    let py = folder.join(format!("{stem}{PY_ONLY_SUFFIX}"));
    let md = folder.join(format!("{stem}{MD_ONLY_SUFFIX}"));
    (py, md)
}

/// Write `content` to `path` unless the file already holds it.
///
/// The existing file is decoded best-effort; undecodable bytes simply
/// compare unequal and get overwritten. Returns whether a write occurred.
pub fn write_text_if_changed(path: &Path, content: &str) -> anyhow::Result<bool> {
    let current = fs::read(path).ok().map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
    if current.as_deref() == Some(content) {
        return Ok(false);
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {}", path.display());
    Ok(true)
}

/// Copy raw notebook bytes to the destination when absent or different
fn copy_notebook_if_changed(raw: &Path, dest: &Path) -> anyhow::Result<bool> {
    let raw_bytes = fs::read(raw).with_context(|| format!("failed to read {}", raw.display()))?;
    if fs::read(dest).ok().as_deref() == Some(raw_bytes.as_slice()) {
        return Ok(false);
    }
    fs::write(dest, &raw_bytes).with_context(|| format!("failed to write {}", dest.display()))?;
    debug!("copied {} -> {}", raw.display(), dest.display());
    Ok(true)
}

/// Copy `raw_notebook` into the interim tree and refresh its paired
/// artifacts.
///
/// Returns the destination notebook path and whether any of the three
/// files (notebook copy, code artifact, documentation artifact) was
/// created or updated.
pub fn process_notebook(config: &Config, raw_notebook: &Path) -> anyhow::Result<Outcome> {
    let stem = raw_notebook
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sanitized = slug::sanitize(&stem);

    let dest_folder = config.interim_dir().join(&sanitized);
    fs::create_dir_all(&dest_folder)
        .with_context(|| format!("failed to create {}", dest_folder.display()))?;
    let dest_notebook = dest_folder.join(format!("{sanitized}.ipynb"));

    let mut changed = copy_notebook_if_changed(raw_notebook, &dest_notebook)?;

    let (py_path, md_path) = paired_paths(&dest_notebook);

    let notebook = Notebook::from_path(&dest_notebook)?;
    let code_only = notebook.subset(CellType::Code);
    let docs_only = notebook.subset(CellType::Markdown);

    // Code artifact: percent script under a two-line provenance header
    let origin = dest_notebook.strip_prefix(config.root()).unwrap_or(&dest_notebook);
    let py_content = format!(
        "# Generated from {}.\n{DO_NOT_EDIT}\n\n{}",
        origin.display(),
        writer::percent_script(&code_only)
    );
    changed |= write_text_if_changed(&py_path, &py_content)?;

    // Documentation artifact: one-line link back to the code artifact
    let py_name = py_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let md_content = format!(
        "[View paired Python script]({py_name})\n\n{}",
        writer::markdown_document(&docs_only)
    );
    changed |= write_text_if_changed(&md_path, &md_content)?;

    Ok(Outcome {
        dest_notebook,
        changed,
    })
}
