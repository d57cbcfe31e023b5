//! TODO app - Main Entry Point
//!
//! This is the entry point of the interactive TODO list manager.
//! The actual implementation is in the `todo_scrape` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use todo_scrape::{DEFAULT_TODO_FILE, Storage, TodoApp};
use tracing_subscriber::EnvFilter;

/// Interactive TODO list manager backed by a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TODO data file
    #[arg(default_value = DEFAULT_TODO_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut app = TodoApp::new(Storage::new(&args.file), stdin.lock(), io::stdout())?;
    app.run()?;
    Ok(())
}
