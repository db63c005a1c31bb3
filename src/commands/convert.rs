//! Convert notebooks and regenerate the catalog

use log::debug;

use nbpair::config::Config;
use nbpair::output::RunSummary;
use nbpair::{catalog, discover, pipeline};

use crate::cli::Cli;

/// Run the conversion pass and, in check mode, report staleness.
///
/// Check mode still performs the full conversion pass before reporting;
/// it exits 1 whenever any notebook was processed this run.
pub fn convert(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::new(&cli.root);
    debug!("mode: all={} check={}", cli.convert_all || !cli.check, cli.check);

    let raw_notebooks = discover::find_notebooks(&config.raw_dir());

    let mut summary = RunSummary::default();
    for raw_notebook in &raw_notebooks {
        let outcome = pipeline::process_notebook(&config, raw_notebook)?;
        summary.record(outcome);
    }

    catalog::build_index(&config, &summary.dest_notebooks())?;

    debug!(
        "processed {} notebook(s), {} changed",
        summary.outcomes.len(),
        summary.changed_count()
    );

    if cli.check {
        if summary.render_check(config.root()) {
            std::process::exit(1);
        }
        return Ok(());
    }

    summary.render_complete();
    Ok(())
}
