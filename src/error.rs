// src/error.rs
//! Error types for fetching, parsing and exporting.
//!
//! None of these end a run on their own: the runner degrades fetch and parse
//! failures to empty values and reports export failures at the export boundary.

use std::path::PathBuf;

/// Failure while fetching or reading a remote page.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network, TLS, timeout or body decoding failure.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// An expected structural element is absent from the page.
    #[error("{what} not found")]
    NotFound { what: &'static str },

    /// The HTTP client could not be constructed.
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ScrapeError {
    /// True for fetch-side failures (as opposed to a page that parsed but lacked content).
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}

/// Failure while writing the final table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    NoData,

    /// A row does not line up with the header count.
    #[error("row {row} has {found} cells but there are {expected} headers")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
