//! Browse command - the interactive catalog browser

use crate::{
    ChampdexError,
    catalog::DataStore,
    ui::ratatui_adapter::{self, BrowseOptions},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute the browse command
///
/// Loads the catalog once and hands it to the terminal browser. `artwork`
/// arrives pre-merged from the config and the `--no-artwork` flag; whether
/// splashes actually render still depends on terminal support.
///
/// # Errors
/// Returns an error if no dataset is available or the terminal session
/// fails
pub fn execute(store: &DataStore, initial_query: Option<String>, artwork: bool) -> Result<()> {
    let catalog = Arc::new(store.load()?);
    let options = BrowseOptions {
        initial_query,
        artwork,
    };
    ratatui_adapter::run(catalog, &options)?;
    Ok(())
}
