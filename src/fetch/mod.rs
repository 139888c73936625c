//! Data Dragon client - downloads and assembles the champion catalog
//!
//! Riot publishes static game data as versioned JSON under a CDN. Building
//! the catalog takes one roster request plus one detail request per
//! champion; detail requests run in parallel. Ability descriptions arrive
//! as HTML fragments and are stripped down to plain text.
//!
//! Roster order in the upstream payload becomes catalog order.

pub mod error;

pub use error::FetchError;

use crate::catalog::{Abilities, Ability, Catalog, Entry, Skin};
use regex::Regex;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::{MapAccess, Visitor};
use std::fmt;
use std::time::Duration;

const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One roster row: champion id plus display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub nickname: String,
}

/// Blocking client for the Data Dragon CDN
#[derive(Debug)]
pub struct ChampionApi {
    client: Client,
    base_url: String,
    tag_strip: Regex,
}

impl ChampionApi {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DDRAGON_BASE)
    }

    /// Build a client against an alternate base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(format!("champdex/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tag_strip: Regex::new(r"<[^>]*>")?,
        })
    }

    /// The most recent published patch version
    pub fn latest_patch(&self) -> Result<String, FetchError> {
        let url = format!("{}/api/versions.json", self.base_url);
        let text = self.client.get(&url).send()?.error_for_status()?.text()?;
        parse_versions(&text)
    }

    /// The roster for a patch and locale, in upstream document order
    pub fn fetch_roster(&self, patch: &str, locale: &str) -> Result<Vec<RosterEntry>, FetchError> {
        let url = format!(
            "{}/cdn/{patch}/data/{locale}/champion.json",
            self.base_url
        );
        let text = self.client.get(&url).send()?.error_for_status()?.text()?;
        parse_roster(&text)
    }

    /// One champion's full record, assembled from its detail payload
    pub fn fetch_entry(
        &self,
        patch: &str,
        locale: &str,
        roster: &RosterEntry,
    ) -> Result<Entry, FetchError> {
        let url = format!(
            "{}/cdn/{patch}/data/{locale}/champion/{}.json",
            self.base_url, roster.id
        );
        let text = self.client.get(&url).send()?.error_for_status()?.text()?;
        self.build_entry(patch, roster, &text)
    }

    /// Download the complete catalog for a patch and locale
    ///
    /// Detail payloads are fetched in parallel; the resulting catalog keeps
    /// the roster's document order.
    pub fn fetch_catalog(&self, patch: &str, locale: &str) -> Result<Catalog, FetchError> {
        use rayon::prelude::*;

        let roster = self.fetch_roster(patch, locale)?;

        let entries: Vec<(String, Entry)> = roster
            .par_iter()
            .map(|row| {
                let entry = self.fetch_entry(patch, locale, row)?;
                Ok((row.id.clone(), entry))
            })
            .collect::<Result<_, FetchError>>()?;

        Ok(entries.into_iter().collect())
    }

    /// Assemble an [`Entry`] from a champion detail payload
    fn build_entry(
        &self,
        patch: &str,
        roster: &RosterEntry,
        text: &str,
    ) -> Result<Entry, FetchError> {
        let mut file: DetailFile = serde_json::from_str(text)?;
        let detail = file
            .data
            .remove(&roster.id)
            .ok_or_else(|| FetchError::MissingRecord {
                id: roster.id.clone(),
            })?;

        if detail.spells.len() < 4 {
            return Err(FetchError::malformed(
                &roster.id,
                format!("expected 4 spells, found {}", detail.spells.len()),
            ));
        }
        let mut spells = detail.spells.into_iter();
        let mut next_spell = |slot: &str| -> Result<Ability, FetchError> {
            let spell = spells
                .next()
                .ok_or_else(|| FetchError::malformed(&roster.id, format!("missing {slot} spell")))?;
            Ok(Ability {
                name: spell.name,
                icon: self.spell_icon_url(patch, &spell.image.full),
                description: self.strip_tags(&spell.description),
            })
        };

        let abilities = Abilities {
            passive: Ability {
                name: detail.passive.name,
                icon: format!(
                    "{}/cdn/{patch}/img/passive/{}",
                    self.base_url, detail.passive.image.full
                ),
                description: self.strip_tags(&detail.passive.description),
            },
            q: next_spell("q")?,
            w: next_spell("w")?,
            e: next_spell("e")?,
            r: next_spell("r")?,
        };

        let skins = detail
            .skins
            .into_iter()
            .map(|skin| Skin {
                name: skin.name,
                splash: self.splash_url(&roster.id, skin.num),
            })
            .collect();

        Ok(Entry {
            name: roster.name.clone(),
            nickname: roster.nickname.clone(),
            icon: format!(
                "{}/cdn/{patch}/img/champion/{}",
                self.base_url, detail.image.full
            ),
            skins,
            abilities,
        })
    }

    /// Splash art URL for a skin
    ///
    /// Splash assets are unversioned and keyed by champion id plus skin
    /// number. The CDN stores Fiddlesticks splashes under a legacy casing
    /// that differs from the data id.
    fn splash_url(&self, id: &str, num: u32) -> String {
        let splash_id = if id.eq_ignore_ascii_case("fiddlesticks") {
            "FiddleSticks"
        } else {
            id
        };
        format!(
            "{}/cdn/img/champion/splash/{splash_id}_{num}.jpg",
            self.base_url
        )
    }

    fn spell_icon_url(&self, patch: &str, image: &str) -> String {
        format!("{}/cdn/{patch}/img/spell/{image}", self.base_url)
    }

    /// Reduce an HTML fragment to its text content
    fn strip_tags(&self, html: &str) -> String {
        self.tag_strip.replace_all(html, "").to_string()
    }
}

fn parse_versions(text: &str) -> Result<String, FetchError> {
    let versions: Vec<String> = serde_json::from_str(text)?;
    versions.into_iter().next().ok_or(FetchError::EmptyVersions)
}

fn parse_roster(text: &str) -> Result<Vec<RosterEntry>, FetchError> {
    let file: RosterFile = serde_json::from_str(text)?;
    Ok(file.data.0)
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Deserialize)]
struct RosterFile {
    data: RosterData,
}

/// Roster map in document order
///
/// Deserialized by hand because the key order of the upstream map defines
/// catalog order.
struct RosterData(Vec<RosterEntry>);

impl<'de> Deserialize<'de> for RosterData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = RosterData;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of champion ids to roster info")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, info)) = access.next_entry::<String, RosterInfo>()? {
                    rows.push(RosterEntry {
                        id,
                        name: info.name,
                        nickname: info.title,
                    });
                }
                Ok(RosterData(rows))
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

#[derive(Deserialize)]
struct RosterInfo {
    name: String,
    title: String,
}

#[derive(Deserialize)]
struct DetailFile {
    data: std::collections::HashMap<String, DetailInfo>,
}

#[derive(Deserialize)]
struct DetailInfo {
    image: ImageRef,
    passive: PassiveInfo,
    spells: Vec<SpellInfo>,
    skins: Vec<SkinInfo>,
}

#[derive(Deserialize)]
struct ImageRef {
    full: String,
}

#[derive(Deserialize)]
struct PassiveInfo {
    name: String,
    description: String,
    image: ImageRef,
}

#[derive(Deserialize)]
struct SpellInfo {
    name: String,
    description: String,
    image: ImageRef,
}

#[derive(Deserialize)]
struct SkinInfo {
    num: u32,
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_api() -> ChampionApi {
        ChampionApi::new().unwrap()
    }

    fn sample_detail_json() -> String {
        let spells: Vec<String> = ["Q", "W", "E", "R"]
            .iter()
            .map(|key| {
                format!(
                    r#"{{"name": "Spell {key}", "description": "<mainText>Does {key} things</mainText>", "image": {{"full": "Aatrox{key}.png"}}}}"#
                )
            })
            .collect();

        format!(
            r#"{{
                "data": {{
                    "Aatrox": {{
                        "image": {{"full": "Aatrox.png"}},
                        "passive": {{
                            "name": "Deathbringer Stance",
                            "description": "Periodically, Aatrox's next attack <b>deals bonus damage</b>.",
                            "image": {{"full": "Aatrox_Passive.png"}}
                        }},
                        "spells": [{spells}],
                        "skins": [
                            {{"num": 0, "name": "default"}},
                            {{"num": 7, "name": "Blood Moon Aatrox"}}
                        ]
                    }}
                }}
            }}"#,
            spells = spells.join(",")
        )
    }

    fn aatrox_roster() -> RosterEntry {
        RosterEntry {
            id: "Aatrox".to_string(),
            name: "Aatrox".to_string(),
            nickname: "the Darkin Blade".to_string(),
        }
    }

    #[test]
    fn test_parse_versions_takes_latest() {
        let patch = parse_versions(r#"["15.1.1", "14.24.1", "14.23.1"]"#).unwrap();
        assert_eq!(patch, "15.1.1");
    }

    #[test]
    fn test_parse_versions_empty_list_errors() {
        let result = parse_versions("[]");
        assert!(matches!(result, Err(FetchError::EmptyVersions)));
    }

    #[test]
    fn test_parse_roster_preserves_document_order() {
        let json = r#"{
            "data": {
                "Zed": {"name": "Zed", "title": "the Master of Shadows"},
                "Aatrox": {"name": "Aatrox", "title": "the Darkin Blade"}
            }
        }"#;
        let roster = parse_roster(json).unwrap();

        let ids: Vec<&str> = roster.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Zed", "Aatrox"]);
        assert_eq!(roster[1].nickname, "the Darkin Blade");
    }

    #[test]
    fn test_build_entry_assembles_urls_and_text() {
        let api = make_api();
        let entry = api
            .build_entry("15.1.1", &aatrox_roster(), &sample_detail_json())
            .unwrap();

        assert_eq!(entry.name, "Aatrox");
        assert_eq!(
            entry.icon,
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/champion/Aatrox.png"
        );
        assert_eq!(
            entry.abilities.passive.icon,
            "https://ddragon.leagueoflegends.com/cdn/15.1.1/img/passive/Aatrox_Passive.png"
        );
        assert_eq!(
            entry.abilities.passive.description,
            "Periodically, Aatrox's next attack deals bonus damage."
        );
        assert_eq!(entry.abilities.q.name, "Spell Q");
        assert_eq!(entry.abilities.r.description, "Does R things");

        assert_eq!(entry.skins.len(), 2);
        assert!(entry.skins[0].is_default());
        assert_eq!(
            entry.skins[1].splash,
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/Aatrox_7.jpg"
        );
    }

    #[test]
    fn test_build_entry_rejects_missing_record() {
        let api = make_api();
        let roster = RosterEntry {
            id: "Zed".to_string(),
            name: "Zed".to_string(),
            nickname: "the Master of Shadows".to_string(),
        };
        let result = api.build_entry("15.1.1", &roster, &sample_detail_json());
        assert!(matches!(result, Err(FetchError::MissingRecord { id }) if id == "Zed"));
    }

    #[test]
    fn test_build_entry_rejects_short_spell_list() {
        let api = make_api();
        let json = r#"{
            "data": {
                "Aatrox": {
                    "image": {"full": "Aatrox.png"},
                    "passive": {"name": "P", "description": "d", "image": {"full": "p.png"}},
                    "spells": [
                        {"name": "Q", "description": "d", "image": {"full": "q.png"}}
                    ],
                    "skins": [{"num": 0, "name": "default"}]
                }
            }
        }"#;
        let result = api.build_entry("15.1.1", &aatrox_roster(), json);
        assert!(matches!(result, Err(FetchError::MalformedEntry { .. })));
    }

    #[test]
    fn test_splash_url_fiddlesticks_casing() {
        let api = make_api();
        assert_eq!(
            api.splash_url("Fiddlesticks", 0),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/FiddleSticks_0.jpg"
        );
        assert_eq!(
            api.splash_url("MissFortune", 8),
            "https://ddragon.leagueoflegends.com/cdn/img/champion/splash/MissFortune_8.jpg"
        );
    }

    #[test]
    fn test_strip_tags_flattens_markup() {
        let api = make_api();
        let stripped =
            api.strip_tags("<mainText>Deal <magicDamage>damage</magicDamage> twice</mainText>");
        assert_eq!(stripped, "Deal damage twice");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = ChampionApi::with_base_url("http://localhost:9000/").unwrap();
        assert_eq!(
            api.splash_url("Aatrox", 0),
            "http://localhost:9000/cdn/img/champion/splash/Aatrox_0.jpg"
        );
    }
}
