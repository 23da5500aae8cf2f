//! Error types for loading the explorer's dataset and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Shared `Result` alias for the explorer core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no browser window available to fetch {url}")]
    NoWindow { url: String },

    #[error("request for {url} failed: {details}")]
    Fetch { url: String, details: String },

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read dataset at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data source {source_label} cannot be loaded on this platform")]
    UnsupportedSource { source_label: String },

    #[error("invalid explorer configuration: {0}")]
    Config(#[from] toml::de::Error),
}
