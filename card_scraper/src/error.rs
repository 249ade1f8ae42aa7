//! Error types for card_scraper

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for card_scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Failed to parse or serialize JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Reading or writing an output file failed
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for card_scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;
