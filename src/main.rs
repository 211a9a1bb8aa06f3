//! CLI entry point for folio-shell
//!
//! Provides command-line interface for checking draft contact messages,
//! previewing the phone mask, and launching the GUI.

use clap::{Parser, Subcommand};
use colored::*;
use folio_shell::config::DEFAULT_CONSENT_PATH;
use folio_shell::core::parser::parse_draft;
use folio_shell::core::{format_phone, validate_submission};
use folio_shell::ui::App;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-shell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a draft contact message for validation errors
    Check {
        /// Path to the draft message file
        draft: PathBuf,
    },

    /// Preview the phone input mask for a number
    Mask {
        /// Raw phone input
        number: String,
    },

    /// Launch the portfolio window
    Gui {
        /// Path where the cookie-consent flag is stored
        #[arg(short, long, default_value = DEFAULT_CONSENT_PATH)]
        consent: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { draft } => check_draft(&draft)?,
        Commands::Mask { number } => {
            println!("{}", format_phone(&number).cyan().bold());
        }
        Commands::Gui { consent } => launch_gui(&consent)?,
    }

    Ok(())
}

/// Parse and validate a draft message file
fn check_draft(draft_path: &PathBuf) -> anyhow::Result<()> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        draft_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = std::path::Path::new(expanded_path.as_ref());

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;

    println!("{} Parsing draft: {}", "→".cyan(), path.display());

    let submission = parse_draft(&content)?;

    if let Some(phone) = &submission.phone {
        println!("{} Phone as entered: {}", "→".cyan(), format_phone(phone));
    }

    let report = validate_submission(&submission);

    if report.is_valid() {
        println!("{} {}", "✓".green().bold(), "Draft is valid!".bold());
        println!("\nReady to send: {} <{}>", submission.name, submission.email);
    } else {
        println!(
            "{} Found {} problem{}:\n",
            "✗".red().bold(),
            report.errors.len(),
            if report.errors.len() == 1 { "" } else { "s" }
        );

        for (i, error) in report.errors.iter().enumerate() {
            println!(
                "  {} {} {}",
                format!("{}.", i + 1).dimmed(),
                format!("[{}]", error.field()).yellow(),
                error
            );
        }

        println!("\n{}", "⚠ Fix the draft before sending!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// Launch the GTK4 portfolio window
fn launch_gui(consent_path: &PathBuf) -> anyhow::Result<()> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        consent_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = PathBuf::from(expanded_path.as_ref());

    let app = App::new(path).map_err(|e| anyhow::anyhow!(e))?;
    app.run();

    Ok(())
}
