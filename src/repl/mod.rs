//! Interactive screening session
//!
//! Drives the menu loop: select a domain, fill its form one field at a time,
//! submit, read the rendered diagnosis. Slash-commands handle everything
//! else. Form state lives only for the duration of one submission.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use colored::Colorize;

use crate::domain::Domain;
use crate::execution;
use crate::registry::ModelRegistry;
use crate::repl::commands::{is_command, CommandHandler};
use crate::repl::input::{InputHandler, ReadOutcome};

pub use crate::repl::display::DisplayManager;
pub use crate::repl::session::{ScreeningRecord, SessionManager};

/// Interactive session coordinator
///
/// Owns input handling, command processing, session history, and display;
/// the model registry is borrowed per run, never stored globally.
pub struct ScreenSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
}

impl ScreenSession {
    /// Create new session
    pub fn new() -> Result<Self> {
        let input_handler = InputHandler::new()?;
        let command_handler = CommandHandler::new();
        let session_manager = SessionManager::new();
        let display_manager = DisplayManager::new();

        Ok(ScreenSession {
            input_handler,
            command_handler,
            session_manager,
            display_manager,
        })
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version);
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self, registry: &ModelRegistry) -> Result<()> {
        loop {
            self.display_manager.show_menu();

            let line = match self.input_handler.read_line("medscreen> ")? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    println!("{}", "Type /exit or press Ctrl-D to quit".yellow());
                    continue;
                }
                ReadOutcome::Eof => break,
            };

            if line.is_empty() {
                continue;
            }

            if is_command(&line) {
                let command = self.command_handler.parse(&line);
                if !self
                    .command_handler
                    .execute(command, &mut self.session_manager)?
                {
                    break;
                }
                continue;
            }

            match Domain::parse(&line) {
                Some(domain) => self.screen(registry, domain)?,
                None => {
                    self.display_manager.show_error(&format!(
                        "Unknown selection '{}'. Choose 1-3 or a domain name.",
                        line
                    ));
                }
            }
        }

        Ok(())
    }

    /// Run one form-and-predict cycle for the selected domain
    fn screen(&mut self, registry: &ModelRegistry, domain: Domain) -> Result<()> {
        self.display_manager.show_form_header(domain);

        let fields = match self.collect_fields(domain)? {
            Some(fields) => fields,
            None => {
                self.display_manager.show_info("Screening cancelled");
                return Ok(());
            }
        };

        let record = execution::run_screening(registry, domain, &fields, &self.display_manager)?;

        self.display_manager.show_debug(
            &format!("{} screening took {}ms", domain, record.duration_ms),
            self.command_handler.is_verbose(),
        );

        self.session_manager.record_screening(record);
        Ok(())
    }

    /// Prompt for one free-text value per field, in field-spec order
    ///
    /// Returns None if the user cancels (/cancel, Ctrl-C, or Ctrl-D). Blank
    /// answers are collected as-is; the parse step reports them.
    fn collect_fields(&mut self, domain: Domain) -> Result<Option<Vec<String>>> {
        let mut fields = Vec::with_capacity(domain.arity());

        for label in domain.field_labels() {
            let prompt = format!("  {}: ", label);
            match self.input_handler.read_line(&prompt)? {
                ReadOutcome::Line(line) => {
                    if line.eq_ignore_ascii_case("/cancel") {
                        return Ok(None);
                    }
                    fields.push(line);
                }
                ReadOutcome::Interrupted | ReadOutcome::Eof => return Ok(None),
            }
        }

        Ok(Some(fields))
    }

    /// Get session manager (immutable)
    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    /// Get display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display_manager
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }
}
