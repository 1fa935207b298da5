// src/cli/menu.rs
use console::style;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::cli::table::{arrange, page_count, render_page, GridOptions, HistoryColumn};
use crate::core::config::Config;
use crate::core::session::{CheckOutcome, CheckerSession};
use crate::models::HistoryFilter;

pub fn run_menu(config: Config) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║     🔐 PASSWORD STRENGTH CHECKER     ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = CheckerSession::new(&config);
    let mut grid = GridOptions::new(config.page_size);

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested {
        let options = vec![
            "1️⃣  Check a password",
            "2️⃣  View password history",
            "❌  Exit",
        ];

        let selection_result = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        match selection_result {
            Ok(Some(selection)) => {
                match selection {
                    "1️⃣  Check a password" => {
                        check_flow(&mut session)?;
                    }
                    "2️⃣  View password history" => {
                        history_flow(&session, &mut grid)?;
                    }
                    "❌  Exit" => {
                        println!("👋 Goodbye!");
                        exit_requested = true;
                    }
                    _ => {}
                }
            }
            Ok(None) => {
                println!("👋 Goodbye!");
                break;
            }
            Err(InquireError::OperationInterrupted) => {
                println!("\n👋 Goodbye!");
                break;
            }
            Err(e) => {
                println!("Error: {}", e);
                break;
            }
        }
    }

    log::info!(
        "Session finished with {} history entries",
        session.history_len()
    );
    Ok(())
}

// Prompt for one candidate and show the verdict. The raw candidate only
// lives inside this function.
fn check_flow(session: &mut CheckerSession) -> anyhow::Result<()> {
    let candidate = match Password::new("Enter your password:")
        .with_display_mode(PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()
    {
        Ok(candidate) => candidate,
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            return Ok(())
        }
        Err(e) => return Err(e.into()),
    };

    match session.submit(&candidate) {
        CheckOutcome::Rejected { violations } => {
            println!(
                "{}",
                style("Your password is weak. Please fix the following issues:")
                    .red()
                    .bold()
            );
            for violation in &violations {
                println!("❌ {}", violation);
            }
        }
        CheckOutcome::Accepted { record } => {
            println!("{}", style("✅ Your password is strong!").green().bold());
            println!(
                "ℹ️  Estimated time to crack this password: {}",
                style(&record.crack_time).cyan()
            );
        }
    }

    // Wait for user to press enter
    let _ = Text::new("Press enter to continue...").prompt();
    Ok(())
}

fn history_flow(session: &CheckerSession, grid: &mut GridOptions) -> anyhow::Result<()> {
    if session.history().is_empty() {
        println!("❗ No passwords checked yet.");
        return Ok(());
    }

    let mut page = 0usize;
    loop {
        let rows = arrange(session.history(), grid);
        let pages = page_count(rows.len(), grid.page_size);

        if pages == 0 {
            println!("❗ No history entries match the current filter.");
        } else {
            if page >= pages {
                page = pages - 1;
            }
            println!();
            println!("🔍 Password History");
            print!("{}", render_page(&rows, page, grid.page_size));
            println!("Page {} of {} ({} entries)", page + 1, pages, rows.len());
        }

        let mut actions = Vec::new();
        if page + 1 < pages {
            actions.push("➡️  Next page");
        }
        if page > 0 {
            actions.push("⬅️  Previous page");
        }
        actions.push("🔃  Sort");
        actions.push("🔍  Filter");
        if grid.filter.is_active() {
            actions.push("🧹  Clear filter");
        }
        actions.push("🔙  Back to main menu");

        let action = match Select::new("History options:", actions).prompt_skippable() {
            Ok(Some(action)) => action,
            Ok(None) => return Ok(()),
            Err(InquireError::OperationInterrupted) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        match action {
            "➡️  Next page" => page += 1,
            "⬅️  Previous page" => page = page.saturating_sub(1),
            "🔃  Sort" => {
                sort_flow(grid)?;
                page = 0;
            }
            "🔍  Filter" => {
                filter_flow(grid)?;
                page = 0;
            }
            "🧹  Clear filter" => {
                grid.filter = HistoryFilter::default();
                page = 0;
            }
            "🔙  Back to main menu" => return Ok(()),
            _ => {}
        }
    }
}

fn sort_flow(grid: &mut GridOptions) -> anyhow::Result<()> {
    let choices = vec![
        "Masked Password (A-Z)",
        "Masked Password (Z-A)",
        "Crack Time (A-Z)",
        "Crack Time (Z-A)",
        "Ledger order",
    ];

    let choice = match Select::new("Sort by:", choices).prompt_skippable() {
        Ok(Some(choice)) => choice,
        Ok(None) => return Ok(()),
        Err(InquireError::OperationInterrupted) => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    match choice {
        "Masked Password (A-Z)" => {
            grid.sort = Some(HistoryColumn::MaskedPassword);
            grid.descending = false;
        }
        "Masked Password (Z-A)" => {
            grid.sort = Some(HistoryColumn::MaskedPassword);
            grid.descending = true;
        }
        "Crack Time (A-Z)" => {
            grid.sort = Some(HistoryColumn::CrackTime);
            grid.descending = false;
        }
        "Crack Time (Z-A)" => {
            grid.sort = Some(HistoryColumn::CrackTime);
            grid.descending = true;
        }
        "Ledger order" => {
            grid.sort = None;
            grid.descending = false;
        }
        _ => {}
    }

    Ok(())
}

fn filter_flow(grid: &mut GridOptions) -> anyhow::Result<()> {
    match Text::new("Masked password contains:")
        .with_help_message("Leave empty to match everything")
        .prompt_skippable()
    {
        Ok(Some(value)) => {
            grid.filter.masked_contains = if value.trim().is_empty() {
                None
            } else {
                Some(value)
            };
        }
        Ok(None) => {}
        Err(InquireError::OperationInterrupted) => return Ok(()),
        Err(e) => return Err(e.into()),
    }

    match Text::new("Crack time contains:")
        .with_help_message("Leave empty to match everything")
        .prompt_skippable()
    {
        Ok(Some(value)) => {
            grid.filter.crack_time_contains = if value.trim().is_empty() {
                None
            } else {
                Some(value)
            };
        }
        Ok(None) => {}
        Err(InquireError::OperationInterrupted) => return Ok(()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
