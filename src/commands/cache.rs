//! Cache command - inspect or clear the on-disk catalog cache

use crate::{
    ChampdexError,
    catalog::DataStore,
    cli::CacheCommands,
    ui::output::{OutputWriter, StdoutWriter},
};
use byte_unit::{Byte, UnitType};
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute a cache subcommand
///
/// # Errors
/// Returns an error if cache files cannot be removed
pub fn execute(store: &DataStore, command: &CacheCommands, quiet: bool) -> Result<()> {
    match command {
        CacheCommands::Status => {
            status(store, quiet);
            Ok(())
        }
        CacheCommands::Clear { force } => clear(store, *force, quiet),
        CacheCommands::Path => {
            println!("{}", store.cache_path().display());
            Ok(())
        }
    }
}

fn status(store: &DataStore, quiet: bool) {
    let status = store.status();

    if quiet {
        println!("{}", if status.is_cached() { "cached" } else { "empty" });
        return;
    }

    println!("Cache: {}", status.path.display());
    match status.size {
        Some(size) => {
            let adjusted = Byte::from_u64(size)
                .get_appropriate_unit(UnitType::Binary)
                .to_string();
            println!("Size: {adjusted}");
        }
        None => println!("Size: not cached"),
    }

    if let Some(info) = status.info {
        println!("Patch: {}", info.patch);
        println!("Locale: {}", info.locale);
        println!(
            "Fetched: {}",
            info.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    } else if status.is_cached() {
        println!("Provenance: unknown (metadata sidecar missing)");
    }
}

fn clear(store: &DataStore, force: bool, quiet: bool) -> Result<()> {
    let writer = StdoutWriter::new();

    if !store.status().is_cached() {
        if !quiet {
            writer.info("Nothing to clear; the cache is empty");
        }
        return Ok(());
    }

    if !force && !quiet {
        let prompt = format!(
            "Delete the cached catalog at {}?",
            store.cache_path().display()
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ChampdexError::InvalidInput(format!("Failed to get confirmation: {e}")))?;
        if !confirmed {
            println!("Clear cancelled.");
            return Ok(());
        }
    }

    store.clear()?;
    if !quiet {
        writer.success("Cache cleared");
    }
    Ok(())
}
