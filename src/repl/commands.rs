//! Command handler for session built-in commands
//!
//! Slash-commands for introspection and session management; everything else
//! typed at the menu is treated as a domain selection.

use crate::domain::Domain;
use crate::repl::session::SessionManager;
use anyhow::Result;
use colored::*;

/// Check whether an input line is a slash-command
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Session command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Domains,
    Fields { domain: Option<Domain> },
    History { limit: Option<usize> },
    Status,
    Reset,
    Verbose { enable: bool },
    Clear,
    Exit,
    Unknown { input: String },
}

/// Command handler for parsing and executing session commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "domains" => Command::Domains,
            "fields" => {
                let domain = if parts.len() > 1 {
                    Domain::parse(&parts[1..].join(" "))
                } else {
                    None
                };
                Command::Fields { domain }
            }
            "history" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                Command::History { limit }
            }
            "status" => Command::Status,
            "reset" => Command::Reset,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false to exit
    pub fn execute(&mut self, command: Command, session: &mut SessionManager) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Goodbye!".green());
                Ok(false)
            }
            Command::Domains => {
                self.show_domains();
                Ok(true)
            }
            Command::Fields { domain } => {
                match domain {
                    Some(d) => self.show_fields(d),
                    None => println!(
                        "{}",
                        "Usage: /fields <diabetes|heart|parkinsons>".yellow()
                    ),
                }
                Ok(true)
            }
            Command::History { limit } => {
                self.show_history(session, limit.unwrap_or(10));
                Ok(true)
            }
            Command::Status => {
                self.show_status(session);
                Ok(true)
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. History cleared.".yellow());
                Ok(true)
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
                Ok(true)
            }
            Command::Clear => {
                print!("\x1B[2J\x1B[1;1H");
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/domains", "List the screening domains"),
            ("/fields <domain>", "Show a domain's input fields, in order"),
            ("/history [n]", "Show last n screenings (default: 10)"),
            ("/status", "Show session statistics"),
            ("/reset", "Clear session history"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit session"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Select a domain by number (1-3) or name to start a screening");
        println!("  - Enter one value per field; {} aborts the form", "/cancel".cyan());
        println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display the domain list
    fn show_domains(&self) {
        println!("\n{}", "Screening Domains:".bold().cyan());
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

    /// Display a domain's input fields in feature-vector order
    fn show_fields(&self, domain: Domain) {
        println!(
            "\n{}",
            format!("{} input fields (in order):", domain.name()).bold().cyan()
        );
        for (i, label) in domain.field_labels().iter().enumerate() {
            println!("  {:>2}. {}", (i + 1).to_string().cyan(), label);
        }
        println!();
    }

    /// Display screening history
    fn show_history(&self, session: &SessionManager, limit: usize) {
        let history = session.get_history(limit);

        if history.is_empty() {
            println!("{}", "No screenings in this session yet.".yellow());
            return;
        }

        println!(
            "\n{}",
            format!("Screening History (last {}):", history.len()).bold().cyan()
        );
        println!("{}", "=".repeat(60).cyan());

        for (i, record) in history.iter().enumerate() {
            let index = history.len() - i;
            let status_icon = if record.success {
                "✓".green()
            } else {
                "✗".red()
            };
            let duration = format!("({}ms)", record.duration_ms).dimmed();

            println!(
                "  {}. {} [{}] {} {}",
                index.to_string().cyan(),
                status_icon,
                record.domain,
                record.message,
                duration
            );

            if self.verbose {
                println!(
                    "     {}",
                    record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
                );
            }
        }
        println!();
    }

    /// Display session status
    fn show_status(&self, session: &SessionManager) {
        println!("\n{}", "Session Status:".bold().cyan());
        println!("  Screenings run: {}", session.screening_count());
        println!("  In history:     {}", session.history_len());
        println!("  Duration:       {}s", session.session_duration().num_seconds());
        println!(
            "  Verbose:        {}",
            if self.verbose { "on" } else { "off" }
        );
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
