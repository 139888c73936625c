//! Testing utilities for champdex
//!
//! Fixture builders for catalog data so controller and store tests can
//! share one roster shape. Compiled only for the crate's own test builds.

use crate::catalog::{Abilities, Ability, Catalog, Entry, Skin, DEFAULT_SKIN_NAME};

/// Build an ability with a derived icon url and description
#[must_use]
pub fn make_ability(name: &str) -> Ability {
    Ability {
        name: name.to_string(),
        icon: format!("https://img.example/{}.png", name.to_lowercase().replace(' ', "_")),
        description: format!("{name} description."),
    }
}

/// Build an entry with the given name and skin count
///
/// The first skin is always the base skin (named with the "default" marker);
/// further skins are named `"{name} Skin {i}"`. The entry id convention in
/// [`sample_catalog`] is the name with spaces removed.
#[must_use]
pub fn make_entry(name: &str, skin_count: usize) -> Entry {
    let mut skins = Vec::with_capacity(skin_count.max(1));
    skins.push(Skin {
        name: DEFAULT_SKIN_NAME.to_string(),
        splash: format!("https://img.example/{name}_0.jpg"),
    });
    for i in 1..skin_count {
        skins.push(Skin {
            name: format!("{name} Skin {i}"),
            splash: format!("https://img.example/{name}_{i}.jpg"),
        });
    }

    Entry {
        name: name.to_string(),
        nickname: format!("the {name}"),
        icon: format!("https://img.example/{name}.png"),
        skins,
        abilities: Abilities {
            passive: make_ability(&format!("{name} Passive")),
            q: make_ability(&format!("{name} Q")),
            w: make_ability(&format!("{name} W")),
            e: make_ability(&format!("{name} E")),
            r: make_ability(&format!("{name} R")),
        },
    }
}

/// Build a small roster in a fixed, non-alphabetical order
///
/// Ids and skin counts:
/// - `Zed` (1 skin)
/// - `Aatrox` (3 skins)
/// - `Ahri` (2 skins)
/// - `MissFortune` ("Miss Fortune", 1 skin)
#[must_use]
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert("Zed".to_string(), make_entry("Zed", 1));
    catalog.insert("Aatrox".to_string(), make_entry("Aatrox", 3));
    catalog.insert("Ahri".to_string(), make_entry("Ahri", 2));
    catalog.insert("MissFortune".to_string(), make_entry("Miss Fortune", 1));
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_order_is_fixed() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.ids(),
            &[
                "Zed".to_string(),
                "Aatrox".to_string(),
                "Ahri".to_string(),
                "MissFortune".to_string(),
            ]
        );
    }

    #[test]
    fn test_make_entry_skin_shape() {
        let entry = make_entry("Aatrox", 3);
        assert_eq!(entry.skins.len(), 3);
        assert!(entry.skins[0].is_default());
        assert_eq!(entry.skins[1].name, "Aatrox Skin 1");
    }

    #[test]
    fn test_make_entry_always_has_base_skin() {
        let entry = make_entry("Zed", 0);
        assert_eq!(entry.skins.len(), 1);
        assert!(entry.skins[0].is_default());
    }
}
