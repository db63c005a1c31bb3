//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;

/// nbpair - Convert notebooks into paired Python and Markdown files
#[derive(Parser, Debug)]
#[command(
    name = "nbpair",
    version,
    about = "Convert notebooks into paired Python and Markdown files",
    long_about = "Convert every notebook under raw/ into a folder under interim/ holding\n\
                  the notebook copy, a code-only Python script, and a markdown-only\n\
                  document, and maintain interim/index.md as a catalog of every pair."
)]
pub struct Cli {
    /// Convert all notebooks (default if no flag)
    #[arg(long = "all")]
    pub convert_all: bool,

    /// After converting, list processed notebooks and exit 1 if any
    #[arg(long)]
    pub check: bool,

    /// Repository root containing the raw/ and interim/ trees
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    commands::convert(&cli)
}
