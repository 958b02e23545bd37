//! Gradebook core: validated grade storage and derived statistics
//!
//! Owns the ordered sequence of grades, enforces the range invariant
//! (every stored value is finite and within [0, 100] inclusive), and
//! derives statistics and a sorted projection on demand.
//!
//! Validation always happens before insertion: no caller can observe
//! the store holding an invalid value, even transiently.

use crate::errors::{GradebookError, Result};

/// Lower bound of the accepted grade range (inclusive)
pub const MIN_GRADE: f64 = 0.0;

/// Upper bound of the accepted grade range (inclusive)
pub const MAX_GRADE: f64 = 100.0;

/// Validated grade container
///
/// Two logical states, Empty and NonEmpty, distinguished solely by
/// `count() == 0`. `add`/`add_many` transition Empty to NonEmpty,
/// `clear` transitions any state back to Empty, and all read
/// operations are state-preserving.
#[derive(Debug, Clone)]
pub struct Gradebook {
    /// Grades in insertion order, duplicates allowed
    grades: Vec<f64>,
}

impl Gradebook {
    /// Create an empty gradebook
    pub fn new() -> Self {
        Gradebook { grades: Vec::new() }
    }

    /// Check a single value against the range invariant
    ///
    /// NaN compares false against both bounds, so finiteness is
    /// checked explicitly rather than relying on the comparisons.
    fn validate(grade: f64) -> Result<()> {
        if !grade.is_finite() || grade < MIN_GRADE || grade > MAX_GRADE {
            return Err(GradebookError::OutOfRange { grade });
        }
        Ok(())
    }

    /// Add a single grade
    ///
    /// Fails with `OutOfRange` when the value is outside [0, 100];
    /// the store is unchanged on failure.
    pub fn add(&mut self, grade: f64) -> Result<()> {
        Self::validate(grade)?;
        self.grades.push(grade);
        Ok(())
    }

    /// Add a batch of grades, all-or-nothing
    ///
    /// Every element is validated before anything is inserted. If any
    /// element is invalid, the error identifies the first offender and
    /// the store is completely unchanged (no partial insertion).
    /// An empty slice succeeds and is a no-op.
    ///
    /// Complexity: O(n) validation pass + O(n) append
    pub fn add_many(&mut self, grades: &[f64]) -> Result<()> {
        for &grade in grades {
            Self::validate(grade)?;
        }
        self.grades.extend_from_slice(grades);
        Ok(())
    }

    /// Arithmetic mean of all stored grades
    ///
    /// Returns 0 for an empty store by explicit policy: an empty
    /// gradebook is not a failure condition.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Highest stored grade, 0 when empty
    pub fn highest(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Lowest stored grade, 0 when empty
    pub fn lowest(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    /// Number of stored grades
    pub fn count(&self) -> usize {
        self.grades.len()
    }

    /// Check whether any grades are stored
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Remove all grades unconditionally
    pub fn clear(&mut self) {
        self.grades.clear();
    }

    /// Sorted copy of the grades, non-decreasing
    ///
    /// Never mutates the store; the insertion-order view is unaffected.
    /// The invariant excludes NaN, so `total_cmp` gives a plain,
    /// reproducible numeric order.
    ///
    /// Complexity: O(n log n)
    pub fn sorted_ascending(&self) -> Vec<f64> {
        let mut sorted = self.grades.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    /// Read-only insertion-order view of the grades
    pub fn grades(&self) -> &[f64] {
        &self.grades
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}
