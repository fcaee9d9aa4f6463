use bookshelf_catalog::{BatchError, CatalogIoError};
use bookshelf_import::ExpandError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog document could not be read or written
    #[error("{0}")]
    Catalog(#[from] CatalogIoError),

    /// Candidate batch could not be loaded
    #[error("{0}")]
    Batch(#[from] BatchError),

    /// Expansion run failed
    #[error("{0}")]
    Expand(#[from] ExpandError),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// Validation found errors
    #[error("Validation failed with {0} error(s)")]
    Validation(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
