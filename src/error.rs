//! Error types for loading documents and building selectors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The document file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid JSON, or a required key is missing.
    #[error("malformed document{}: {source}", origin(.path))]
    MalformedDocument {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Mutually exclusive selector fields were set together.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

fn origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" {}", p.display()),
        None => String::new(),
    }
}
