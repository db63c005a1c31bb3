//! Catalog generation
//!
//! Regenerates `interim/index.md` from scratch each run, linking every
//! notebook whose code and documentation artifacts are both present.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::config::Config;
use crate::pipeline::{paired_paths, write_text_if_changed};
use crate::slug;

/// Heading of the generated catalog document
const CATALOG_HEADING: &str = "# Notebook Catalogue";

/// Regenerate the catalog for the given destination notebooks.
///
/// Notebooks missing either paired artifact are skipped (a notebook could
/// have failed mid-pipeline); entries are sorted by slug, case-insensitive.
/// Nothing is written when `dest_notebooks` is empty, and an unchanged
/// catalog is left untouched. Returns whether a write occurred.
pub fn build_index(config: &Config, dest_notebooks: &[PathBuf]) -> anyhow::Result<bool> {
    if dest_notebooks.is_empty() {
        return Ok(false);
    }

    let index_dir = config.interim_dir();
    fs::create_dir_all(&index_dir)
        .with_context(|| format!("failed to create {}", index_dir.display()))?;

    let mut sorted: Vec<&PathBuf> = dest_notebooks.iter().collect();
    sorted.sort_by_key(|path| stem_of(path).to_lowercase());

    let mut lines = vec![CATALOG_HEADING.to_string(), String::new()];
    for notebook in sorted {
        let (py_path, md_path) = paired_paths(notebook);
        if !py_path.exists() || !md_path.exists() {
            debug!("skipping {}: incomplete pair", notebook.display());
            continue;
        }

        let rel_py = relative_path(&py_path, &index_dir);
        let rel_md = relative_path(&md_path, &index_dir);
        let title = slug::display_title(&stem_of(notebook));
        lines.push(format!(
            "- **{title}** - [Code]({}) / [Docs]({})",
            posix(&rel_py),
            posix(&rel_md)
        ));
    }

    let mut content = lines.join("\n");
    content.push('\n');

    write_text_if_changed(&config.index_path(), &content)
}

/// Compute `target` relative to `base` without touching the filesystem.
///
/// Walks the shared component prefix, then backs out of what remains of
/// `base`. Paths sharing no prefix at all (for example different drive
/// roots) come back as given rather than failing.
#[must_use]
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target_components: Vec<Component<'_>> = target.components().collect();
    let base_components: Vec<Component<'_>> = base.components().collect();

    let common = target_components
        .iter()
        .zip(base_components.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && (target.is_absolute() || base.is_absolute()) {
        return target.to_path_buf();
    }

    let mut rel = PathBuf::new();
    for _ in common..base_components.len() {
        rel.push("..");
    }
    for component in &target_components[common..] {
        rel.push(component.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

fn stem_of(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

fn posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
