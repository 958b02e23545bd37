//! Input handler for the REPL using rustyline
//!
//! Provides line editing with optional persistent command history.
//! Only typed lines are persisted; grades themselves never are.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Readline wrapper managing editing and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    /// Create an input handler without persistent history
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
        })
    }

    /// Create an input handler with persistent history
    ///
    /// Loads existing history if the file is present; the file is
    /// written back by `save_history` on graceful shutdown.
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Read one line of input with the given prompt
    ///
    /// Returns:
    /// - `Ok(Some(line))` for normal input (trimmed)
    /// - `Ok(None)` for EOF (Ctrl-D), meaning the session should end
    ///
    /// Ctrl-C cancels the current prompt and comes back as an empty
    /// line, which every flow treats as "ignore / cancel".
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                let _ = self.editor.add_history_entry(trimmed);

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("readline error: {}", err)),
        }
    }

    /// Save history to disk, if a history file was configured
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Clear command history
    pub fn clear_history(&mut self) {
        let _ = self.editor.history_mut().clear();
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_handler_creation() {
        let handler = InputHandler::new();
        assert!(handler.is_ok());
    }

    #[test]
    fn test_input_handler_with_history() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("test_history");

        let handler = InputHandler::with_history(history_path);
        assert!(handler.is_ok());
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("history");

        {
            let mut handler = InputHandler::with_history(history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("summary");
            let _ = handler.editor.add_history_entry("sorted");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        {
            let handler = InputHandler::with_history(history_path).unwrap();
            assert_eq!(handler.history_len(), 2);
        }
    }

    #[test]
    fn test_clear_history() {
        let mut handler = InputHandler::new().unwrap();
        let _ = handler.editor.add_history_entry("summary");
        assert_eq!(handler.history_len(), 1);

        handler.clear_history();
        assert_eq!(handler.history_len(), 0);
    }

    #[test]
    fn test_history_path_none() {
        let handler = InputHandler::new().unwrap();
        assert!(handler.history_path.is_none());
    }

    #[test]
    fn test_save_without_history_path_is_noop() {
        let mut handler = InputHandler::new().unwrap();
        assert!(handler.save_history().is_ok());
    }
}
