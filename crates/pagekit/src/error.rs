//! Error types for pagekit.

use std::path::PathBuf;

/// Result type alias for pagekit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring a paginator.
///
/// Navigation itself never fails: out-of-range requests are clamped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Page size of zero.
    #[error("Invalid page size {size}: a page must hold at least one item")]
    InvalidPageSize { size: usize },

    /// Malformed configuration document.
    #[error("Failed to parse paginator config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("Failed to read paginator config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a page size error.
    pub fn invalid_page_size(size: usize) -> Self {
        Self::InvalidPageSize { size }
    }

    /// Create a config read error.
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}
