//! Run reporting
//!
//! Collects per-notebook outcomes and owns the human-facing rendering,
//! including the check-mode staleness listing on the error stream.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::pipeline::Outcome;

/// Summary of one conversion run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Outcome for every notebook processed this run
    pub outcomes: Vec<Outcome>,
}

impl RunSummary {
    /// Record the outcome of one notebook
    pub fn record(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Whether any notebook was processed this run
    #[must_use]
    pub fn any_processed(&self) -> bool {
        !self.outcomes.is_empty()
    }

    /// Number of notebooks whose files were created or updated
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.changed).count()
    }

    /// Destination notebooks processed this run, in processing order
    #[must_use]
    pub fn dest_notebooks(&self) -> Vec<PathBuf> {
        self.outcomes.iter().map(|o| o.dest_notebook.clone()).collect()
    }

    /// Final line for a normal conversion run
    pub fn render_complete(&self) {
        println!("{}", "Notebook conversion complete.".green());
    }

    /// Check-mode rendering: list processed notebooks on stderr.
    ///
    /// Paths are shown relative to `root`. Returns true when the run is
    /// stale (anything was processed), which maps to exit code 1.
    #[must_use]
    pub fn render_check(&self, root: &Path) -> bool {
        if !self.any_processed() {
            println!("{}", "All notebooks are up-to-date.".green());
            return false;
        }

        eprintln!("{}", "The following notebooks have outdated pairs:".yellow());
        for outcome in &self.outcomes {
            let shown = outcome.dest_notebook.strip_prefix(root).unwrap_or(&outcome.dest_notebook);
            eprintln!("  - {}", shown.display());
        }
        true
    }
}
