//! Product link scraper - Entry Point
//!
//! Fetches the configured page once and writes the product links it finds
//! to JSON and CSV. Takes no input besides an optional configuration file.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use todo_scrape::scrape::{self, ScrapeConfig};
use tracing_subscriber::EnvFilter;

/// Scrape product links from a single page into JSON and CSV files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file overriding the default URL, output paths, link class or user agent
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => match ScrapeConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e:#}");
                return ExitCode::FAILURE;
            }
        },
        None => ScrapeConfig::default(),
    };

    let mut out = io::stdout().lock();
    match scrape::run(&config, &mut out) {
        Ok(report) => {
            tracing::debug!(
                matched = report.matched,
                retained = report.products.len(),
                "run finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(out, "{e}");
            ExitCode::FAILURE
        }
    }
}
