//! Interactive REPL for the gradebook
//!
//! Menu-driven loop: read a choice, dispatch to the matching flow,
//! render results, repeat. All validation lives in the core store;
//! this module only parses text, prompts and formats output.

pub mod commands;
pub mod display;
pub mod input;
pub mod parser;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::GradebookError;
use crate::gradebook::Gradebook;
use crate::repl::commands::Command;
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::InputHandler;

/// REPL session coordinator
///
/// Owns the gradebook instance for the process lifetime together with
/// the input and display handlers. One logical session, single
/// threaded, nothing survives exit.
pub struct ReplSession {
    book: Gradebook,
    input: InputHandler,
    display: DisplayManager,
    confirm_clear: bool,
}

impl ReplSession {
    /// Create a session without persistent command history
    pub fn new(config: &Config) -> Result<Self> {
        Ok(ReplSession {
            book: Gradebook::new(),
            input: InputHandler::new()?,
            display: DisplayManager::new(&config.display),
            confirm_clear: config.confirm_clear,
        })
    }

    /// Create a session with persistent command history
    pub fn with_history(config: &Config, history_path: PathBuf) -> Result<Self> {
        Ok(ReplSession {
            book: Gradebook::new(),
            input: InputHandler::with_history(history_path)?,
            display: DisplayManager::new(&config.display),
            confirm_clear: config.confirm_clear,
        })
    }

    /// Run the interactive loop until quit or EOF
    pub fn run(&mut self, quiet: bool) -> Result<()> {
        if !quiet {
            let _ = self.display.clear_screen();
            self.display.show_banner(env!("CARGO_PKG_VERSION"));
        }

        loop {
            self.display.show_menu();

            let line = match self.input.read_line("\nChoose an option (1-7): ")? {
                Some(line) => line,
                None => break, // Ctrl-D
            };

            if !self.handle_input(&line)? {
                break;
            }
        }

        println!("\nThank you for using Gradebook. Goodbye!");
        Ok(())
    }

    /// Handle one input line
    ///
    /// Returns true if the session should continue, false to exit.
    /// Empty input (including a cancelled prompt) is ignored.
    pub fn handle_input(&mut self, line: &str) -> Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        match commands::parse(line) {
            Command::AddSingle => self.add_single()?,
            Command::AddBatch => self.add_batch()?,
            Command::Summary => self.display.show_summary(&self.book),
            Command::Clear => self.clear_grades()?,
            Command::List => self.display.show_grades(self.book.grades()),
            Command::Sorted => self.display.show_sorted(&self.book.sorted_ascending()),
            Command::Quit => return Ok(false),
            Command::Help => commands::show_help(),
            Command::ClearScreen => {
                let _ = self.display.clear_screen();
            }
            Command::Unknown { input } => {
                self.display.show_warning(&format!(
                    "unknown option '{}', enter a number between 1 and 7",
                    input.trim()
                ));
            }
        }

        Ok(true)
    }

    /// Add a single grade, re-prompting until accepted or cancelled
    fn add_single(&mut self) -> Result<()> {
        loop {
            let line = match self.input.read_line("Enter grade (0-100): ")? {
                Some(line) => line,
                None => return Ok(()), // EOF cancels the entry
            };

            if line.is_empty() {
                self.display.show_info("entry cancelled");
                return Ok(());
            }

            let grade = match parser::parse_grade(&line) {
                Ok(grade) => grade,
                Err(err) => {
                    self.display.show_warning(&err.to_string());
                    continue;
                }
            };

            match self.book.add(grade) {
                Ok(()) => {
                    self.display.show_added(grade);
                    return Ok(());
                }
                Err(err) => {
                    self.display.show_error(&err.to_string());
                    self.display.show_info("please try again");
                }
            }
        }
    }

    /// Add multiple grades from one line
    ///
    /// Unparseable tokens are reported and skipped; the surviving
    /// values go through the all-or-nothing batch insert, so one
    /// out-of-range grade rejects the whole line.
    fn add_batch(&mut self) -> Result<()> {
        println!("Enter grades separated by commas or spaces (e.g. 85, 92 78 65.5):");

        let line = match self.input.read_line("> ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        let parsed = match parser::parse_grade_list(&line) {
            Ok(parsed) => parsed,
            Err(GradebookError::InvalidArgument(reason)) => {
                self.display.show_warning(&reason);
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        for token in &parsed.skipped {
            self.display.show_warning(&format!("skipping invalid entry: {}", token));
        }

        if parsed.is_empty() {
            self.display.show_warning("no valid grades were entered");
            return Ok(());
        }

        match self.book.add_many(&parsed.grades) {
            Ok(()) => self.display.show_batch_added(parsed.grades.len()),
            Err(err) => {
                self.display.show_error(&err.to_string());
                self.display.show_info("nothing was added");
            }
        }

        Ok(())
    }

    /// Clear all grades, asking for confirmation first
    fn clear_grades(&mut self) -> Result<()> {
        if self.confirm_clear {
            let answer = self
                .input
                .read_line("Are you sure you want to clear all grades? (yes/no): ")?;

            let answer = answer.map(|a| a.trim().to_lowercase());
            let confirmed = matches!(answer.as_deref(), Some("yes") | Some("y"));

            if !confirmed {
                self.display.show_info("clear operation cancelled");
                return Ok(());
            }
        }

        self.book.clear();
        self.display.show_info("all grades have been cleared");
        Ok(())
    }

    /// Get the gradebook (immutable)
    pub fn book(&self) -> &Gradebook {
        &self.book
    }

    /// Get the gradebook (mutable)
    pub fn book_mut(&mut self) -> &mut Gradebook {
        &mut self.book
    }

    /// Save command history on graceful shutdown
    pub fn save(&mut self) -> Result<()> {
        self.input.save_history()?;
        Ok(())
    }
}
