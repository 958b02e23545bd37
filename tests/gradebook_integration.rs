//! Integration tests for the gradebook core
//!
//! Exercises the store through its public API the way the REPL uses
//! it: validated inserts, atomic batches, derived statistics and the
//! two views.

use gradebook::{Gradebook, GradebookError};

// Single-grade insertion

#[test]
fn test_add_appends_in_order() {
    let mut book = Gradebook::new();

    book.add(85.0).unwrap();
    book.add(92.0).unwrap();
    book.add(85.0).unwrap(); // duplicates allowed

    assert_eq!(book.count(), 3);
    assert_eq!(book.grades(), &[85.0, 92.0, 85.0]);
}

#[test]
fn test_add_rejects_and_leaves_store_unchanged() {
    let mut book = Gradebook::new();
    book.add(50.0).unwrap();

    let err = book.add(100.5).unwrap_err();
    assert!(matches!(err, GradebookError::OutOfRange { grade } if grade == 100.5));
    assert!(err.to_string().contains("100.5"));

    assert_eq!(book.count(), 1);
    assert_eq!(book.grades(), &[50.0]);
}

// Batch insertion

#[test]
fn test_batch_success_and_statistics() {
    let mut book = Gradebook::new();
    book.add_many(&[85.0, 92.0, 78.0, 65.5]).unwrap();

    assert_eq!(book.count(), 4);
    assert!((book.average() - 80.125).abs() < 1e-9);
    assert_eq!(book.highest(), 92.0);
    assert_eq!(book.lowest(), 65.5);
}

#[test]
fn test_batch_is_all_or_nothing() {
    let mut book = Gradebook::new();

    let err = book.add_many(&[85.0, 150.0, 70.0]).unwrap_err();
    assert!(matches!(err, GradebookError::OutOfRange { grade } if grade == 150.0));

    // Not even the valid leading values were inserted
    assert_eq!(book.count(), 0);
}

#[test]
fn test_batch_reports_first_offender_only() {
    let mut book = Gradebook::new();

    let err = book.add_many(&[-5.0, 200.0]).unwrap_err();
    assert!(matches!(err, GradebookError::OutOfRange { grade } if grade == -5.0));
}

// Empty-store policy

#[test]
fn test_empty_store_zero_defaults() {
    let book = Gradebook::new();

    assert_eq!(book.average(), 0.0);
    assert_eq!(book.highest(), 0.0);
    assert_eq!(book.lowest(), 0.0);
    assert_eq!(book.count(), 0);
    assert!(book.sorted_ascending().is_empty());
}

// Views

#[test]
fn test_round_trip_sorted_and_insertion_views() {
    let mut book = Gradebook::new();
    book.add_many(&[100.0, 0.0, 50.0]).unwrap();

    assert_eq!(book.sorted_ascending(), vec![0.0, 50.0, 100.0]);
    assert_eq!(book.grades(), &[100.0, 0.0, 50.0]);
}

#[test]
fn test_sorted_view_is_idempotent_and_non_mutating() {
    let mut book = Gradebook::new();
    book.add_many(&[90.0, 10.0, 90.0, 55.5]).unwrap();

    let first = book.sorted_ascending();
    let second = book.sorted_ascending();

    assert_eq!(first, second);
    assert_eq!(book.grades(), &[90.0, 10.0, 90.0, 55.5]);
}

// Clearing

#[test]
fn test_clear_then_reads_match_fresh_store() {
    let mut book = Gradebook::new();
    book.add_many(&[85.0, 92.0, 78.0]).unwrap();

    book.clear();

    let fresh = Gradebook::new();
    assert_eq!(book.count(), fresh.count());
    assert_eq!(book.average(), fresh.average());
    assert_eq!(book.highest(), fresh.highest());
    assert_eq!(book.lowest(), fresh.lowest());
    assert_eq!(book.sorted_ascending(), fresh.sorted_ascending());
    assert_eq!(book.grades(), fresh.grades());
}

#[test]
fn test_store_reusable_after_clear() {
    let mut book = Gradebook::new();
    book.add_many(&[10.0, 20.0]).unwrap();
    book.clear();

    book.add(99.0).unwrap();
    assert_eq!(book.grades(), &[99.0]);
    assert_eq!(book.highest(), 99.0);
}
