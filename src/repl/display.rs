//! Display manager for the gradebook terminal UI
//!
//! Formats the menu, statistics summary and grade listings with
//! color-coded output. Numeric precision comes from configuration.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io;

use crate::config::DisplayConfig;
use crate::gradebook::Gradebook;

/// Display manager for the REPL UI
pub struct DisplayManager {
    /// Decimal places for the average (summary only)
    average_precision: usize,
    /// Decimal places for individual grades
    grade_precision: usize,
}

impl DisplayManager {
    pub fn new(config: &DisplayConfig) -> Self {
        DisplayManager {
            average_precision: config.average_precision,
            grade_precision: config.grade_precision,
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  Gradebook {} - Interactive Grade Tracker", version);
        let info = "  Grades: 0-100 | Session only, nothing is saved";
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Choose a menu option (or {} for commands, {} to quit)\n",
            "help".green(),
            "quit".green()
        );
    }

    /// Show the main menu
    pub fn show_menu(&self) {
        println!("\n{}", "Gradebook".bold().cyan());
        println!("{}", "-".repeat(40).cyan());
        println!("  {}. Add a single grade", "1".cyan());
        println!("  {}. Add multiple grades in one line", "2".cyan());
        println!("  {}. View summary (average, highest, lowest)", "3".cyan());
        println!("  {}. Clear all grades", "4".cyan());
        println!("  {}. List grades in entry order", "5".cyan());
        println!("  {}. List grades sorted lowest to highest", "6".cyan());
        println!("  {}. Exit", "7".cyan());
    }

    /// Show the statistics summary
    pub fn show_summary(&self, book: &Gradebook) {
        println!("\n{}", "Gradebook Summary".bold().cyan());
        println!("{}", "=".repeat(40).cyan());

        if book.is_empty() {
            println!("{}", "No grades recorded yet.".yellow());
            return;
        }

        let gp = self.grade_precision;
        println!("  Number of grades: {}", book.count().to_string().green());
        println!(
            "  Average:          {}",
            format!("{:.*}", self.average_precision, book.average()).green()
        );
        println!("  Highest:          {}", format!("{:.gp$}", book.highest()).green());
        println!("  Lowest:           {}", format!("{:.gp$}", book.lowest()).green());
    }

    /// List grades in insertion order
    pub fn show_grades(&self, grades: &[f64]) {
        if grades.is_empty() {
            println!("{}", "No grades to display.".yellow());
            return;
        }

        println!("\n{}", format!("All Grades ({}):", grades.len()).bold().cyan());
        println!("{}", "=".repeat(40).cyan());

        let gp = self.grade_precision;
        for (i, grade) in grades.iter().enumerate() {
            println!("  {:>3}. {:>6.gp$}", (i + 1).to_string().cyan(), grade);
        }
    }

    /// List grades sorted ascending, labelling the extremes
    pub fn show_sorted(&self, sorted: &[f64]) {
        if sorted.is_empty() {
            println!("{}", "No grades recorded yet.".yellow());
            return;
        }

        println!("\n{}", "Sorted Grades (Lowest to Highest)".bold().cyan());
        println!("{}", "-".repeat(40).cyan());

        let gp = self.grade_precision;
        for (i, grade) in sorted.iter().enumerate() {
            let label = if i == 0 {
                "Lowest".to_string()
            } else if i == sorted.len() - 1 {
                "Highest".to_string()
            } else {
                format!("{}", i + 1)
            };

            println!("  {:<10} | {:>6.gp$}", label.cyan(), grade);
        }

        println!("{}", "-".repeat(40).cyan());
        println!("  Total grades: {}", sorted.len().to_string().green());
    }

    /// Confirm a single added grade
    pub fn show_added(&self, grade: f64) {
        println!(
            "{} Grade {} added.",
            "✓".green(),
            format!("{:.*}", self.grade_precision, grade).green()
        );
    }

    /// Confirm an accepted batch
    pub fn show_batch_added(&self, count: usize) {
        println!(
            "{} Added {} grade(s).",
            "✓".green(),
            count.to_string().green()
        );
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}
