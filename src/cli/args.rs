//! Command-line argument parsing
//!
//! Provides clap-based flags for the interactive session. There are
//! no subcommands; the binary always starts the menu loop.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Gradebook - interactive terminal grade tracker
#[derive(Parser, Debug, Default)]
#[command(name = "gradebook")]
#[command(version)]
#[command(about = "Record grades, validate them and view statistics", long_about = None)]
pub struct Args {
    /// Configuration file path (default: ~/.gradebook/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command history file (default: ~/.gradebook_history)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Disable persistent command history
    #[arg(long)]
    pub no_history: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Resolve the history file, flags taking precedence over config
    ///
    /// `--no-history` wins over everything; `--history` wins over the
    /// config file; otherwise the config decides (which defaults to
    /// `~/.gradebook_history`).
    pub fn history_file(&self, config: &Config) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }

        self.history.clone().or_else(|| config.history_file())
    }

    /// Check whether colored output should be used
    pub fn use_color(&self, config: &Config) -> bool {
        !self.no_color && config.display.color
    }
}
