use crate::loader::Loader;
use clap::{ArgAction, Parser};
use eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod checks;
mod display;
mod loader;
mod model;
mod stats;
mod writer;

#[derive(Parser)]
#[clap(version, about = "Normalize competition results into teams and institutions tables")]
struct Options {
    /// CSV file containing the raw competition results
    results: PathBuf,
    /// Set verbosity level
    #[clap(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("rnorm={}", level)))
        .init();
    let loader = Loader::new(&options.results);
    let (institutions, teams) = loader.load()?;
    checks::ensure_institutions_resolved(&institutions, &teams)?;
    writer::write_teams(&teams)?;
    writer::write_institutions(&institutions)?;
    display::display_summary(&institutions, &teams);
    display::display_shared_institutions(&institutions, &teams);
    Ok(())
}
