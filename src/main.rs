//! Gradebook - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;

use gradebook::cli::Args;
use gradebook::config::Config;
use gradebook::repl::ReplSession;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    if !args.use_color(&config) {
        colored::control::set_override(false);
    }

    let mut session = match args.history_file(&config) {
        Some(path) => ReplSession::with_history(&config, path)?,
        None => ReplSession::new(&config)?,
    };

    session.run(args.quiet)?;
    session.save()?;

    Ok(())
}
