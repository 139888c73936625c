//! Champdex - a terminal champion catalog browser
//!
//! This library provides the catalog data model, the search and detail-panel
//! controllers that coordinate over a typed signal bus, the Data Dragon
//! dataset builder, and a ratatui front end with splash-art rendering.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod completions;
pub mod config;
pub mod fetch;
pub mod panel;
pub mod search;
pub mod signals;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Top-level error covering every way a command can fail
#[derive(Debug, Error)]
pub enum ChampdexError {
    /// Catalog load or lookup error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Data Dragon fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] fetch::FetchError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Configuration read or write error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Filesystem error outside the catalog store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed argument or declined confirmation
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
