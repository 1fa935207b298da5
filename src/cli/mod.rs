// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod table;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Keep only the newest N history entries, 0 means unbounded
    #[arg(long, env = "HISTORY_LIMIT")]
    pub history_limit: Option<usize>,

    /// Rows per page in the history table
    #[arg(long, env = "PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
