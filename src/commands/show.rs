//! Show command - print one champion's full record

use crate::{
    ChampdexError,
    catalog::{AbilitySlot, Catalog, CatalogError},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, ChampdexError>;

/// Execute the show command
///
/// The identifier is resolved case-insensitively against both ids and
/// display names, so `show "miss fortune"` finds `MissFortune`. Quiet mode
/// prints tab-separated rows instead of the formatted record.
///
/// # Errors
/// Returns `CatalogError::EntryNotFound` if nothing matches the identifier
pub fn execute(catalog: &Catalog, id: &str, quiet: bool) -> Result<()> {
    let (_, entry) = catalog
        .resolve(id)
        .ok_or_else(|| CatalogError::EntryNotFound(id.to_string()))?;

    if quiet {
        println!("{}\t{}", entry.name, entry.nickname);
        for skin in &entry.skins {
            let name = if skin.is_default() { &entry.name } else { &skin.name };
            println!("skin\t{name}");
        }
        for slot in AbilitySlot::ALL {
            let ability = entry.abilities.get(slot);
            println!("{}\t{}", slot.label().to_lowercase(), ability.name);
        }
        return Ok(());
    }

    println!("{} {}", entry.name.bold(), entry.nickname.italic());
    println!();

    println!("Skins ({}):", entry.skins.len());
    for skin in &entry.skins {
        if skin.is_default() {
            println!("  {} (base splash)", entry.name);
        } else {
            println!("  {}", skin.name);
        }
    }
    println!();

    println!("Abilities:");
    for slot in AbilitySlot::ALL {
        let ability = entry.abilities.get(slot);
        println!("  [{}] {}", slot.label().cyan(), ability.name.bold());
        println!("      {}", ability.description.dimmed());
    }

    Ok(())
}
