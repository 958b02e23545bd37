//! Gradebook - interactive terminal grade tracker
//!
//! The core is the [`Gradebook`] container: it owns the grades,
//! enforces the [0, 100] validity invariant and derives statistics
//! and a sorted projection on demand. Around it sits a menu-driven
//! REPL shell that parses free-text input and renders results.
//!
//! Nothing survives process exit except the typed-command history.

pub mod cli;
pub mod config;
pub mod errors;
pub mod gradebook;
pub mod repl;

// Re-export commonly used types
pub use errors::{GradebookError, Result};
pub use gradebook::Gradebook;
