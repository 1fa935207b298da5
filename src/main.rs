use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::Path;

mod checker;
mod cli;
mod core;
mod estimator;
mod history;
mod masking;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    // Command line flags win over environment configuration
    if let Some(limit) = args.history_limit {
        config.history_limit = if limit == 0 { None } else { Some(limit) };
    }
    if let Some(size) = args.page_size {
        config.page_size = size.max(1);
    }

    match args.command {
        Some(command) => {
            // One-shot commands log to stderr so stdout stays scriptable
            env_logger::Builder::new()
                .filter_level(config.log_level)
                .format_timestamp_secs()
                .init();

            run_command(command, &config, args.json)
        }
        None => {
            init_interactive_logging(&config)?;

            if args.json {
                log::warn!("--json has no effect in interactive mode");
            }

            ctrlc::set_handler(move || {
                log::info!("🔴 Ctrl+C received. Shutting down...");
                println!("\n🧹 Session closed. Goodbye!");
                std::process::exit(0);
            })
            .expect("Failed to set Ctrl+C handler");

            log::info!("🔐 Starting PassCheck - Password Strength Checker");
            cli::menu::run_menu(config)
        }
    }
}

fn run_command(command: CliCommand, config: &Config, json: bool) -> anyhow::Result<()> {
    match command {
        CliCommand::Check => cli::handlers::handle_check(config, json),
        CliCommand::Batch {
            sort,
            descending,
            filter,
        } => cli::handlers::handle_batch(config, json, sort, descending, filter),
    }
}

// The interactive menu logs to a file so prompts render cleanly
fn init_interactive_logging(config: &Config) -> anyhow::Result<()> {
    config.ensure_directories_exist();

    let log_file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}
