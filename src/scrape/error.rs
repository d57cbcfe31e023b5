//! Error types for the scraper.
//!
//! Both variants end the run. Nothing is retried and no output file is
//! written after an error is raised.

/// Errors that can occur during a scraper run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The request could not be sent or completed, or the server answered
    /// with a client/server error status.
    #[error("error while accessing the website: {0}")]
    Network(String),

    /// Anything else: decoding, parsing or writing the output files.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<std::io::Error> for ScrapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Unexpected(e.to_string())
    }
}

impl From<serde_json::Error> for ScrapeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Unexpected(format!("JSON output failed: {e}"))
    }
}

impl From<csv::Error> for ScrapeError {
    fn from(e: csv::Error) -> Self {
        Self::Unexpected(format!("CSV output failed: {e}"))
    }
}

/// Convenience type alias for scraper results.
pub type Result<T> = std::result::Result<T, ScrapeError>;
