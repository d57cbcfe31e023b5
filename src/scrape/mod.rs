//! Single-page product link scraper
//!
//! Fetches one page, finds the anchors carrying the configured class, keeps
//! the complete ones, and writes them to a JSON file and a CSV file. Progress
//! is reported on the console writer passed in by the caller.
//!
//! - `config`: what to fetch and where to write
//! - `fetch`: the HTTP request and body decoding
//! - `extract`: title and product link extraction
//! - `export`: JSON and CSV output

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;

pub use config::ScrapeConfig;
pub use error::ScrapeError;
pub use extract::{ProductLink, ProductRecord};

use error::Result;
use std::io::Write;
use url::Url;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default)]
pub struct ScrapeReport {
    /// Page title, if the page had one
    pub title: Option<String>,
    /// Number of anchors carrying the configured class
    pub matched: usize,
    /// Records that passed the retention filter, in page order
    pub products: Vec<ProductRecord>,
}

impl ScrapeReport {
    /// Output files are written whenever at least one anchor matched,
    /// even if none of them survived the filter.
    pub fn files_written(&self) -> bool {
        self.matched > 0
    }
}

/// Fetch the configured page and process it.
///
/// # Errors
///
/// [`ScrapeError::Network`] if the page cannot be fetched, in which case no
/// file is written; [`ScrapeError::Unexpected`] for any later failure.
pub fn run(config: &ScrapeConfig, out: &mut impl Write) -> Result<ScrapeReport> {
    let html = fetch::fetch_page(config)?;
    process_page(config, &html, out)
}

/// Extract products from already fetched HTML and write the output files.
///
/// If no anchor carries the configured class, a notice is printed and no
/// file is touched.
pub fn process_page(config: &ScrapeConfig, html: &str, out: &mut impl Write) -> Result<ScrapeReport> {
    let base = Url::parse(&config.url)
        .map_err(|e| ScrapeError::Unexpected(format!("invalid base URL '{}': {e}", config.url)))?;

    let page = extract::extract_page(html, &config.link_class, &base);

    match page.title {
        Some(ref title) => writeln!(out, "Page title: {title}")?,
        None => writeln!(out, "No <title> tag found.")?,
    }
    writeln!(out, "\n--- Product names and URLs ---")?;

    let matched = page.links.len();
    if matched == 0 {
        writeln!(out, "No product information found.")?;
        return Ok(ScrapeReport {
            title: page.title,
            matched,
            products: Vec::new(),
        });
    }
    writeln!(out, "Found {matched} link(s).")?;

    let products: Vec<ProductRecord> = page
        .links
        .into_iter()
        .filter_map(ProductLink::into_record)
        .collect();
    tracing::info!(matched, retained = products.len(), "product links extracted");

    for (i, product) in products.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, product.name)?;
        writeln!(out, "   URL: {}", product.url)?;
    }

    export::write_json(&config.json_path, &products)?;
    writeln!(
        out,
        "\nSaved products as JSON to '{}'.",
        config.json_path.display()
    )?;

    export::write_csv(&config.csv_path, &products)?;
    writeln!(
        out,
        "Saved products as CSV to '{}'.",
        config.csv_path.display()
    )?;

    Ok(ScrapeReport {
        title: page.title,
        matched,
        products,
    })
}
