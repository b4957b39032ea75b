use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "orgaudit",
    version,
    about = "Checks manager salary bands and reporting-line depth in an employee CSV"
)]
pub struct Cli {
    /// Employee CSV (Id,firstName,lastName,salary,managerId). Use `-` for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero status when issues are found
    #[arg(long)]
    pub strict: bool,

    /// Rules file (defaults to ./orgaudit.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the minimum manager/report salary ratio
    #[arg(long, value_name = "RATIO")]
    pub min_ratio: Option<f64>,

    /// Override the maximum manager/report salary ratio
    #[arg(long, value_name = "RATIO")]
    pub max_ratio: Option<f64>,

    /// Override the maximum number of managers between an employee and the CEO
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}
