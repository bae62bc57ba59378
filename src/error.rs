//! Error Types
//!
//! Nothing here is shown to the user; callers log the error and leave state as it was.

use thiserror::Error;

/// Rejected input for an item or a display control
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item description is empty")]
    EmptyDescription,
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
    #[error("unknown sort mode: {0:?}")]
    UnknownSortMode(String),
}

/// Problems reading the embedded app configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("seed item {index}: {source}")]
    SeedItem {
        index: usize,
        #[source]
        source: ItemError,
    },
    #[error("no quantity options configured")]
    NoQuantityOptions,
}
