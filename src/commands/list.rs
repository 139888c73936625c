//! List command - print the roster in catalog order

use crate::{ChampdexError, catalog::Catalog};

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute the list command
///
/// Quiet mode prints one id per line with no header.
pub fn execute(catalog: &Catalog, quiet: bool) -> Result<()> {
    if catalog.is_empty() {
        if !quiet {
            println!("Catalog is empty. Run `champdex fetch` first.");
        }
        return Ok(());
    }

    if quiet {
        for id in catalog.ids() {
            println!("{id}");
        }
        return Ok(());
    }

    println!("{} champions:", catalog.len());
    for (id, entry) in catalog.iter() {
        println!(
            "  {id:<16} {}, {} (skins: {})",
            entry.name,
            entry.nickname,
            entry.skins.len()
        );
    }
    Ok(())
}
