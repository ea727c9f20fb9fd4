//! Paginator configuration.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use pagekit::PaginatorConfig;
//!
//! let config = PaginatorConfig::from_toml_str("page_size = 12").unwrap();
//! assert_eq!(config.page_size, 12);
//!
//! // Missing keys fall back to defaults.
//! let config = PaginatorConfig::from_toml_str("").unwrap();
//! assert_eq!(config.page_size, pagekit::DEFAULT_PAGE_SIZE);
//! ```

use std::path::Path;

use pagekit_core::logging::targets;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Number of items per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Settings for a [`Paginator`](crate::Paginator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginatorConfig {
    /// Maximum number of items on one page. Must be at least 1.
    pub page_size: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginatorConfig {
    /// Create a validated configuration.
    pub fn new(page_size: usize) -> Result<Self> {
        let config = Self { page_size };
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a usable paginator.
    pub fn validate(&self) -> Result<()> {
        validate_page_size(self.page_size).map(|_| ())
    }

    /// Parse and validate a configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::config_read(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            page_size = config.page_size,
            "loaded paginator config"
        );
        Ok(config)
    }
}

pub(crate) fn validate_page_size(page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(Error::invalid_page_size(page_size));
    }
    Ok(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_page_size() {
        assert_eq!(PaginatorConfig::default().page_size, 24);
        assert!(PaginatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_new_rejects_zero() {
        let err = PaginatorConfig::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { size: 0 }));
        assert_eq!(PaginatorConfig::new(5).unwrap().page_size, 5);
    }

    #[test]
    fn test_from_toml_str() {
        let config = PaginatorConfig::from_toml_str("page_size = 10").unwrap();
        assert_eq!(config, PaginatorConfig { page_size: 10 });
    }

    #[test]
    fn test_from_toml_str_rejects_zero() {
        let err = PaginatorConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { .. }));
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(matches!(
            PaginatorConfig::from_toml_str("page_size = \"many\""),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            PaginatorConfig::from_toml_str("chunk = 3"),
            Err(Error::ConfigParse(_))
        ));
        assert!(matches!(
            PaginatorConfig::from_toml_str("page_size = -4"),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 8").unwrap();

        let config = PaginatorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 8);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = PaginatorConfig::from_file(&path).unwrap_err();
        match err {
            Error::ConfigRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
