use clap::Parser;

/// Find the shortest chain of shared releases between two musicians.
#[derive(Parser, Debug, Clone)]
#[command(name = "bandtree", version, about)]
pub struct Args {
    /// Starting musician name
    pub musician1: String,

    /// Target musician name
    pub musician2: String,

    /// Load the catalog snapshot from a local JSON file
    #[arg(long)]
    pub data_path: Option<String>,

    /// Re-download the catalog snapshot even if a cached copy exists
    #[arg(long)]
    pub refresh: bool,

    /// Only print the path flow line
    #[arg(short, long)]
    pub quiet: bool,

    /// Show search statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the connecting releases for each step
    #[arg(long)]
    pub hide_releases: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
