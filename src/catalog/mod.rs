//! Catalog data model - champions, skins, and abilities
//!
//! This module provides the data types for the champion catalog. It is
//! designed to be UI-agnostic: the controllers and the CLI commands both
//! operate on the same types.
//!
//! # Architecture
//!
//! - `Catalog`: insertion-ordered mapping from entry id to [`Entry`]
//! - `Entry`: one champion with name, nickname, icon, skins, abilities
//! - `store`: dataset loading and the session cache ([`DataStore`])
//! - Pure data structures with minimal business logic
//!
//! The catalog is loaded once and treated as immutable for the session.
//! Iteration order is the order of the source JSON document, which is why
//! `Catalog` carries its own key order instead of relying on `HashMap`
//! iteration.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub mod error;
pub mod store;

pub use error::CatalogError;
pub use store::{CacheStatus, DataStore, FetchInfo};

/// Literal skin name marking an entry's base skin
///
/// Exactly one skin per entry is expected to carry this name; the carousel
/// renders its indicator dot filled and substitutes the entry name for the
/// caption. Datasets violating that expectation are considered invalid
/// rather than guarded against.
pub const DEFAULT_SKIN_NAME: &str = "default";

// ============================================================================
// Core Domain Types
// ============================================================================

/// One champion in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name (e.g. "Aatrox")
    pub name: String,

    /// Short epithet shown under the name (e.g. "the Darkin Blade")
    pub nickname: String,

    /// Square icon image URL
    pub icon: String,

    /// Alternate splash-art variants, in dataset order
    pub skins: Vec<Skin>,

    /// The five ability slots
    pub abilities: Abilities,
}

/// An alternate visual variant of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    /// Skin name; the base skin uses the literal [`DEFAULT_SKIN_NAME`]
    pub name: String,

    /// Wide splash-art image URL
    pub splash: String,
}

/// The fixed set of ability slots for an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abilities {
    pub passive: Ability,
    pub q: Ability,
    pub w: Ability,
    pub e: Ability,
    pub r: Ability,
}

/// A named capability of an entry, shown in the panel accordion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,

    /// Square icon image URL
    pub icon: String,

    /// Plain-text description (HTML already stripped at fetch time)
    pub description: String,
}

/// Identifies one of the five ability slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilitySlot {
    Passive,
    Q,
    W,
    E,
    R,
}

impl Skin {
    /// Whether this is the entry's base skin
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_SKIN_NAME
    }
}

impl Abilities {
    /// Get the ability in a given slot
    #[must_use]
    pub const fn get(&self, slot: AbilitySlot) -> &Ability {
        match slot {
            AbilitySlot::Passive => &self.passive,
            AbilitySlot::Q => &self.q,
            AbilitySlot::W => &self.w,
            AbilitySlot::E => &self.e,
            AbilitySlot::R => &self.r,
        }
    }
}

impl AbilitySlot {
    /// All slots in display order
    pub const ALL: [Self; 5] = [Self::Passive, Self::Q, Self::W, Self::E, Self::R];

    /// Short label for list rows and exports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passive => "Passive",
            Self::Q => "Q",
            Self::W => "W",
            Self::E => "E",
            Self::R => "R",
        }
    }
}

// ============================================================================
// Catalog - insertion-ordered id -> Entry map
// ============================================================================

/// The full champion catalog
///
/// Serializes as a JSON object keyed by entry id. Key order is preserved on
/// both read and write so that grid order, result order, and sibling
/// navigation all agree with the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    ids: Vec<String>,
    entries: HashMap<String, Entry>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entry ids in catalog order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Resolve a user-supplied identifier to a catalog entry
    ///
    /// Tries an exact id match first, then scans ids and display names
    /// case-insensitively. Returns the canonical id with the entry.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<(&str, &Entry)> {
        if let Some((id, entry)) = self.entries.get_key_value(query) {
            return Some((id.as_str(), entry));
        }
        self.iter().find(|(id, entry)| {
            id.eq_ignore_ascii_case(query) || entry.name.eq_ignore_ascii_case(query)
        })
    }

    /// Whether an id exists in the catalog
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert an entry, appending its id to the iteration order
    ///
    /// Re-inserting an existing id replaces the entry without duplicating
    /// its position.
    pub fn insert(&mut self, id: String, entry: Entry) {
        if !self.entries.contains_key(&id) {
            self.ids.push(id.clone());
        }
        self.entries.insert(id, entry);
    }

    /// Iterate `(id, entry)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.ids
            .iter()
            .filter_map(|id| self.entries.get(id).map(|e| (id.as_str(), e)))
    }
}

impl FromIterator<(String, Entry)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for (id, entry) in iter {
            catalog.insert(id, entry);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ids.len()))?;
        for (id, entry) in self.iter() {
            map.serialize_entry(id, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of entry id to entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut catalog = Catalog::new();
                while let Some((id, entry)) = access.next_entry::<String, Entry>()? {
                    catalog.insert(id, entry);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
