//! Free-text grade parsing for the REPL
//!
//! Turns a raw input line into numeric values, splitting on commas
//! and whitespace. Unparseable tokens are collected and reported
//! rather than aborting the whole batch. Range checking is not done
//! here: the gradebook core owns the [0, 100] invariant.

use crate::errors::{GradebookError, Result};

/// Outcome of parsing a grade-list line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGrades {
    /// Values that parsed as numbers, in input order
    pub grades: Vec<f64>,
    /// Tokens that did not parse, in input order
    pub skipped: Vec<String>,
}

impl ParsedGrades {
    /// Check whether any tokens parsed as numbers
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

/// Parse a line of grades separated by commas and/or whitespace
///
/// A blank line fails with `InvalidArgument`; a line with tokens never
/// fails, it only sorts tokens into parsed values and skipped text.
pub fn parse_grade_list(input: &str) -> Result<ParsedGrades> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GradebookError::InvalidArgument(
            "no grades provided".to_string(),
        ));
    }

    let mut grades = Vec::new();
    let mut skipped = Vec::new();

    let tokens = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    for token in tokens {
        match token.parse::<f64>() {
            Ok(value) => grades.push(value),
            Err(_) => skipped.push(token.to_string()),
        }
    }

    Ok(ParsedGrades { grades, skipped })
}

/// Parse a single grade entry
///
/// Blank input and non-numeric input both fail with `InvalidArgument`,
/// with messages the REPL can show verbatim.
pub fn parse_grade(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GradebookError::InvalidArgument(
            "no input received, please enter a number".to_string(),
        ));
    }

    trimmed.parse::<f64>().map_err(|_| {
        GradebookError::InvalidArgument(format!("'{}' is not a valid number", trimmed))
    })
}
