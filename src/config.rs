use std::path::PathBuf;

use clap::Parser;

/// Turns the collected street-centerline CSV into a de-duplicated table of
/// street intersections.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Street-centerline CSV to read
    #[arg(long, default_value = "data/collected-chicago-street-centerlines.csv")]
    pub input: PathBuf,

    /// Where to write the munged intersections CSV
    #[arg(long, default_value = "data/munged-chicago-intersections.csv")]
    pub output: PathBuf,

    /// Where to write the trimmed JSON used by the map demo
    #[arg(long, default_value = "docs/static/chicago-intersections.json")]
    pub json_output: PathBuf,
}
