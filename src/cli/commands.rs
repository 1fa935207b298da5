// src/cli/commands.rs
use clap::Subcommand;

use crate::cli::table::HistoryColumn;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check one password read from the first line of stdin
    Check,

    /// Check one password per stdin line, then print the session history
    Batch {
        /// Sort the history table by this column
        #[arg(long, value_enum)]
        sort: Option<HistoryColumn>,

        /// Sort descending instead of ascending
        #[arg(long)]
        descending: bool,

        /// Only show rows whose masked password contains this text
        #[arg(long)]
        filter: Option<String>,
    },
}
