use thiserror::Error;

/// Errors that can occur while loading a catalog or configuring a search
#[derive(Error, Debug)]
pub enum MatcherError {
    /// Catalog JSON could not be deserialized
    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    CatalogIo(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A date string was not in YYYY-MM-DD form
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
