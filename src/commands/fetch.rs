//! Fetch command - download champion data into the local cache

use crate::{
    ChampdexError,
    catalog::{DataStore, FetchInfo},
    config::ChampdexConfig,
    fetch::ChampionApi,
    ui::output::{OutputWriter, StdoutWriter},
};
use chrono::Utc;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute the fetch command
///
/// Patch resolution order: the `--patch` flag, then the configured pin,
/// then the latest published version. The locale falls back to the
/// configured one. An existing cache is only overwritten after
/// confirmation unless `--force` is given (quiet mode auto-confirms).
///
/// # Errors
/// Returns an error if a download fails, the payload is malformed, or the
/// cache cannot be written
pub fn execute(
    store: &DataStore,
    config: &ChampdexConfig,
    patch: Option<String>,
    locale: Option<String>,
    output: Option<&Path>,
    force: bool,
    quiet: bool,
) -> Result<()> {
    let writer = StdoutWriter::new();

    if store.status().is_cached() && !force && !quiet {
        let prompt = format!(
            "A cached catalog already exists at {}. Overwrite it?",
            store.cache_path().display()
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ChampdexError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Fetch cancelled.");
            return Ok(());
        }
    }

    let api = ChampionApi::new()?;

    let locale = locale.unwrap_or_else(|| config.locale.clone());
    let patch = match patch.or_else(|| config.patch.clone()) {
        Some(pinned) => pinned,
        None => {
            if !quiet {
                writer.write("Resolving latest patch");
            }
            api.latest_patch()?
        }
    };

    if !quiet {
        writer.write(&format!("Fetching champion data for patch {patch} ({locale})"));
    }

    let catalog = api.fetch_catalog(&patch, &locale)?;

    let info = FetchInfo {
        patch,
        locale,
        fetched_at: Utc::now(),
    };
    store.store(&catalog, &info)?;

    if !quiet {
        writer.success(&format!(
            "Cached {} champions at {}",
            catalog.len(),
            store.cache_path().display()
        ));
    }

    if let Some(path) = output {
        fs::copy(store.cache_path(), path)?;
        if !quiet {
            writer.success(&format!("Wrote catalog to {}", path.display()));
        }
    }

    Ok(())
}
