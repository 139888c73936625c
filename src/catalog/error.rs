//! Catalog-specific error types
//!
//! This module defines all error types that can occur while loading, caching,
//! or querying the champion catalog. Errors are properly categorized and
//! include context for debugging.
//!
//! # Error Types
//!
//! - **`Io`**: Filesystem failures while reading or writing the dataset
//! - **`Json`**: Malformed catalog documents
//! - **`MetaParse`** / **`MetaWrite`**: Problems with the cache metadata sidecar
//! - **`NoDataset`**: No cached dataset and no configured source to load from
//!
//! All errors implement `std::error::Error` via the `thiserror` crate and provide
//! helpful error messages for debugging.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Represents an I/O error while reading or writing dataset files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed catalog JSON
    #[error("Error while parsing catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed cache metadata sidecar
    #[error("Error while parsing cache metadata: {0}")]
    MetaParse(#[from] toml::de::Error),

    /// Cache metadata could not be serialized
    #[error("Error while writing cache metadata: {0}")]
    MetaWrite(#[from] toml::ser::Error),

    /// The platform cache directory could not be determined
    #[error("Could not determine a cache directory for this platform")]
    CacheDir,

    /// No dataset is available from any source
    #[error(
        "No dataset found at {} - run `champdex fetch` or configure a dataset path",
        .cache.display()
    )]
    NoDataset { cache: PathBuf },

    /// An entry id was not found in the catalog
    #[error("No entry found for '{0}'")]
    EntryNotFound(String),
}
