use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pt")]
#[command(about = "Project tracker CLI: projects, developers and schedule views as JSON")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
