//! Dataset loading and the session cache
//!
//! The catalog is read from a fixed-name cache file; while that file is
//! present no other source is consulted. On a cache miss the store falls
//! back to a configured local dataset file (copying it into the cache for
//! subsequent loads), and otherwise reports that a fetch is required.
//!
//! A small TOML sidecar records where the cached data came from (patch,
//! locale, fetch time) for `champdex cache status`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, CatalogError};

/// Fixed cache file name, the single key the session cache is stored under
pub const DATA_FILE: &str = "data.json";

/// Cache metadata sidecar file name
pub const META_FILE: &str = "meta.toml";

/// Provenance of a cached dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchInfo {
    /// Data Dragon patch version the dataset was built from
    pub patch: String,

    /// Locale of the champion texts
    pub locale: String,

    /// When the dataset was fetched
    pub fetched_at: DateTime<Utc>,
}

/// Snapshot of the cache state for status reporting
#[derive(Debug, Clone)]
pub struct CacheStatus {
    /// Path of the cache data file
    pub path: PathBuf,

    /// Size of the cache data file in bytes, if present
    pub size: Option<u64>,

    /// Provenance metadata, if the sidecar is present and parses
    pub info: Option<FetchInfo>,
}

impl CacheStatus {
    /// Whether a cached dataset is present
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        self.size.is_some()
    }
}

/// Loads the catalog and owns the session cache
///
/// Constructed once at startup and handed to whatever needs dataset access
/// (the browser's application context, the roster commands, the fetch
/// command's output side).
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
    dataset_path: Option<PathBuf>,
}

impl DataStore {
    /// Create a store rooted at the platform cache directory
    ///
    /// # Arguments
    /// * `dataset_path` - Optional local dataset file consulted on cache miss
    ///
    /// # Errors
    /// Returns `CatalogError::CacheDir` if the platform has no cache directory.
    pub fn open(dataset_path: Option<PathBuf>) -> Result<Self, CatalogError> {
        let root = dirs::cache_dir()
            .ok_or(CatalogError::CacheDir)?
            .join("champdex");
        Ok(Self::with_root(root, dataset_path))
    }

    /// Create a store rooted at an explicit directory
    #[must_use]
    pub const fn with_root(root: PathBuf, dataset_path: Option<PathBuf>) -> Self {
        Self { root, dataset_path }
    }

    /// Path of the cache data file
    #[must_use]
    pub fn cache_path(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    /// Path of the cache metadata sidecar
    #[must_use]
    pub fn meta_path(&self) -> PathBuf {
        self.root.join(META_FILE)
    }

    /// Load the catalog
    ///
    /// Resolution order: the session cache if present, else the configured
    /// local dataset file (which is then copied into the cache so later
    /// loads hit it directly).
    ///
    /// # Errors
    /// Returns `CatalogError::NoDataset` when neither source exists, or an
    /// I/O/parse error from whichever source was read.
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let cache = self.cache_path();
        if cache.is_file() {
            return read_catalog(&cache);
        }

        if let Some(source) = &self.dataset_path
            && source.is_file()
        {
            let catalog = read_catalog(source)?;
            self.write_data(&catalog)?;
            return Ok(catalog);
        }

        Err(CatalogError::NoDataset { cache })
    }

    /// Write a freshly fetched catalog and its provenance into the cache
    ///
    /// # Errors
    /// Returns an error if the cache directory cannot be created or either
    /// file cannot be written.
    pub fn store(&self, catalog: &Catalog, info: &FetchInfo) -> Result<(), CatalogError> {
        self.write_data(catalog)?;
        let meta = toml::to_string_pretty(info)?;
        fs::write(self.meta_path(), meta)?;
        Ok(())
    }

    /// Remove the cached dataset and its sidecar
    ///
    /// Returns whether a cached data file existed.
    ///
    /// # Errors
    /// Returns an I/O error if removal fails for a reason other than the
    /// file being absent.
    pub fn clear(&self) -> Result<bool, CatalogError> {
        let existed = self.cache_path().is_file();
        remove_if_present(&self.cache_path())?;
        remove_if_present(&self.meta_path())?;
        Ok(existed)
    }

    /// Inspect the cache without loading the catalog
    #[must_use]
    pub fn status(&self) -> CacheStatus {
        let path = self.cache_path();
        let size = fs::metadata(&path).ok().map(|m| m.len());
        let info = fs::read_to_string(self.meta_path())
            .ok()
            .and_then(|text| toml::from_str(&text).ok());

        CacheStatus { path, size, info }
    }

    fn write_data(&self, catalog: &Catalog) -> Result<(), CatalogError> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string(catalog)?;
        fs::write(self.cache_path(), json)?;
        Ok(())
    }
}

fn read_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn remove_if_present(path: &Path) -> Result<(), CatalogError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
