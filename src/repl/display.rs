//! Display manager for the interactive terminal UI
//!
//! Renders the banner, the domain menu, form headers, and the styled
//! success/error result lines.

use crate::domain::Domain;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Display manager for session UI
pub struct DisplayManager;

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  MedScreen {} - Disease Risk Screening", version);
        let info = "  Models: Diabetes | Heart Disease | Parkinson's".to_string();
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Select a screening domain (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Show the domain menu (the sidebar analog)
    pub fn show_menu(&self) {
        println!("\n{}", "Screening Domains".bold().cyan());
        println!("{}", "-".repeat(40).cyan());
        for (i, domain) in Domain::ALL.iter().enumerate() {
            println!(
                "  {}. {} {}",
                (i + 1).to_string().cyan(),
                domain.title(),
                format!("({} fields)", domain.arity()).dimmed()
            );
        }
        println!();
    }

    /// Show the header above a domain's input form
    pub fn show_form_header(&self, domain: Domain) {
        println!("\n{}", domain.title().bold().cyan());
        println!("{}", "-".repeat(40).cyan());
        println!(
            "{}",
            format!(
                "Enter {} values (or {} to abort)",
                domain.arity(),
                "/cancel".green()
            )
            .dimmed()
        );
    }

    /// Display a success-styled diagnosis line
    pub fn show_success(&self, message: &str) {
        println!("\n{} {}\n", "✓".green().bold(), message.green().bold());
    }

    /// Display an error-styled message
    pub fn show_error(&self, error: &str) {
        println!("\n{} {}\n", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display debug message (only if verbose)
    pub fn show_debug(&self, debug: &str, verbose: bool) {
        if verbose {
            println!("{} {}", "Debug:".dimmed(), debug.dimmed());
        }
    }

    /// Spinner shown while the model registry loads at startup
    pub fn start_loading(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Flush any buffered output
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
