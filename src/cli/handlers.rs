// src/cli/handlers.rs
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use serde_json::json;

use crate::cli::table::{arrange, render_page, GridOptions, HistoryColumn};
use crate::core::config::Config;
use crate::core::session::{CheckOutcome, CheckerSession};
use crate::masking::mask_password;

// Handlers for the one-shot CLI commands. Candidates come in on stdin so
// they never show up in shell history or the process list.

/// Check a single candidate read from the first line of stdin.
pub fn handle_check(config: &Config, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let candidate = read_candidate(&mut stdin.lock())?;

    let mut session = CheckerSession::new(config);
    let outcome = session.submit(&candidate);
    report_outcome(&outcome, json);
    Ok(())
}

/// Check one candidate per stdin line, then print the session history.
pub fn handle_batch(
    config: &Config,
    json: bool,
    sort: Option<HistoryColumn>,
    descending: bool,
    filter: Option<String>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut session = CheckerSession::new(config);
    let mut checked = 0usize;
    let mut accepted = 0usize;

    for line in stdin.lock().lines() {
        let candidate = line.context("Failed to read candidates from stdin")?;
        checked += 1;

        match session.submit(&candidate) {
            CheckOutcome::Rejected { violations } => {
                if !json {
                    println!(
                        "❌ {}: {} issue(s)",
                        mask_password(&candidate),
                        violations.len()
                    );
                }
            }
            CheckOutcome::Accepted { record } => {
                accepted += 1;
                if !json {
                    println!("✅ {}: {}", record.masked_password, record.crack_time);
                }
            }
        }
    }

    // Sort and filter shape the reported view in both output modes. The
    // ledger itself keeps insertion order.
    let mut options = GridOptions::new(session.history_len().max(1));
    options.sort = sort;
    options.descending = descending;
    options.filter.masked_contains = filter;
    let rows = arrange(session.history(), &options);

    if json {
        let response = json!({
            "success": true,
            "checked": checked,
            "accepted": accepted,
            "history": rows,
        });
        println!("{}", response);
        return Ok(());
    }

    if session.history_len() == 0 {
        println!("\n❗ No passwords made it into the history.");
    } else {
        println!();
        println!("🔍 Password History");
        print!("{}", render_page(&rows, 0, rows.len().max(1)));
    }

    println!("\nChecked {} password(s), {} accepted.", checked, accepted);
    Ok(())
}

// Only the line terminator is stripped. Leading and interior whitespace are
// part of the candidate.
fn read_candidate(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read candidate from stdin")?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn report_outcome(outcome: &CheckOutcome, json: bool) {
    match outcome {
        CheckOutcome::Rejected { violations } => {
            if json {
                let messages: Vec<&str> = violations.iter().map(|v| v.message()).collect();
                let response = json!({
                    "success": true,
                    "strong": false,
                    "violations": messages,
                });
                println!("{}", response);
            } else {
                println!("❌ Your password is weak. Please fix the following issues:");
                for violation in violations {
                    println!("  ❌ {}", violation);
                }
            }
        }
        CheckOutcome::Accepted { record } => {
            if json {
                let response = json!({
                    "success": true,
                    "strong": true,
                    "masked_password": record.masked_password,
                    "crack_time": record.crack_time,
                });
                println!("{}", response);
            } else {
                println!("✅ Your password is strong!");
                println!(
                    "ℹ️ Estimated time to crack this password: {}",
                    record.crack_time
                );
            }
        }
    }
}
