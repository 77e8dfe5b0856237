use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quicksite")]
#[command(about = "Replay an order through the QuickSite order and checkout pages")]
pub struct CliConfig {
    /// TOML file with the values typed into each page
    #[arg(short, long, default_value = "scenario.toml")]
    pub scenario: PathBuf,

    /// Site configuration; canonical defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
