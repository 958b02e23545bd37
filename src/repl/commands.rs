//! Menu command parsing for the REPL
//!
//! The menu accepts the numbered options 1-7 plus word aliases, so
//! both "3" and "summary" reach the same command. Parsing is pure;
//! execution lives in the session coordinator.

use colored::*;

/// Menu command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a single grade (option 1)
    AddSingle,
    /// Add multiple grades from one line (option 2)
    AddBatch,
    /// Show count, average, highest and lowest (option 3)
    Summary,
    /// Clear all grades, with confirmation (option 4)
    Clear,
    /// List grades in insertion order (option 5)
    List,
    /// List grades sorted ascending (option 6)
    Sorted,
    /// Exit the session (option 7)
    Quit,
    /// Show the command reference
    Help,
    /// Clear the screen
    ClearScreen,
    Unknown { input: String },
}

/// Parse an input line into a menu command
///
/// Complexity: O(1) string matching
pub fn parse(input: &str) -> Command {
    match input.trim().to_lowercase().as_str() {
        "1" | "add" | "a" => Command::AddSingle,
        "2" | "batch" | "many" | "b" => Command::AddBatch,
        "3" | "summary" | "stats" | "s" => Command::Summary,
        "4" | "clear" => Command::Clear,
        "5" | "list" | "l" => Command::List,
        "6" | "sorted" | "sort" => Command::Sorted,
        "7" | "quit" | "exit" | "q" => Command::Quit,
        "help" | "h" | "?" => Command::Help,
        "cls" => Command::ClearScreen,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

/// Display the command reference
pub fn show_help() {
    println!("\n{}", "Available Commands:".bold().cyan());
    println!("{}", "=".repeat(60).cyan());

    let commands = vec![
        ("1, add", "Add a single grade (0-100)"),
        ("2, batch", "Add multiple grades from one line"),
        ("3, summary", "Show count, average, highest and lowest"),
        ("4, clear", "Clear all grades (asks for confirmation)"),
        ("5, list", "List grades in the order they were entered"),
        ("6, sorted", "List grades sorted lowest to highest"),
        ("7, quit", "Exit the gradebook"),
        ("help, ?", "Show this help message"),
        ("cls", "Clear the screen"),
    ];

    for (cmd, desc) in commands {
        println!("  {:<14} {}", cmd.green(), desc);
    }

    println!("\n{}", "Usage:".bold());
    println!("  - Grades can be separated by {} in batch mode", "commas or spaces".cyan());
    println!("  - Press {} on an empty prompt to cancel an entry", "Enter".cyan());
    println!("  - Press {} or type {} to exit", "Ctrl-D".cyan(), "quit".cyan());
    println!();
}
