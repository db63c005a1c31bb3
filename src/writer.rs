//! Plain-text renderers for notebook cell subsets
//!
//! The code format is the percent script convention (`# %%` cell markers);
//! the documentation format is plain markdown. Renderers are pure string
//! builders: provenance headers and file placement belong to the pipeline.

use crate::notebook::Notebook;

/// Marker line introducing each cell of a percent script
const PERCENT_MARKER: &str = "# %%";

/// Render a notebook as a percent-format script.
///
/// Cells are emitted in order, each under its own marker line, separated by
/// one blank line, with a single trailing newline. An empty notebook
/// renders to the empty string.
#[must_use]
pub fn percent_script(notebook: &Notebook) -> String {
    let blocks: Vec<String> = notebook
        .cells
        .iter()
        .map(|cell| format!("{PERCENT_MARKER}\n{}", cell.source.as_text().trim_end_matches('\n')))
        .collect();
    join_blocks(&blocks)
}

/// Render a notebook as a markdown document.
///
/// Cell sources are joined with one blank line between them, with a single
/// trailing newline. An empty notebook renders to the empty string.
#[must_use]
pub fn markdown_document(notebook: &Notebook) -> String {
    let blocks: Vec<String> = notebook
        .cells
        .iter()
        .map(|cell| cell.source.as_text().trim_end_matches('\n').to_string())
        .collect();
    join_blocks(&blocks)
}

fn join_blocks(blocks: &[String]) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
