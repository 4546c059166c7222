//! Input handler for the interactive session using rustyline
//!
//! Provides readline functionality with in-memory history and graceful
//! interrupt handling. Nothing the user types is persisted to disk.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// What a single read attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input (possibly empty)
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Input handler managing the readline interface
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler { editor })
    }

    /// Read a line of input with the given prompt
    pub fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }

                Ok(ReadOutcome::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}
