//! Integration tests for the champdex catalog pipeline
//!
//! These tests verify end-to-end functionality by storing catalogs in
//! temporary caches and driving the browse controllers over the signal bus
//! the same way the terminal front end wires them.

use champdex::catalog::{
    Abilities, Ability, Catalog, DEFAULT_SKIN_NAME, DataStore, Entry, FetchInfo, Skin,
};
use champdex::cli::ExportFormat;
use champdex::commands;
use champdex::panel::PanelController;
use champdex::search::SearchController;
use champdex::signals::{Signal, SignalBus, dispatch_all};
use chrono::Utc;
use std::sync::Arc;

/// Helper to build one ability with derived metadata
fn make_ability(name: &str) -> Ability {
    Ability {
        name: name.to_string(),
        icon: format!("https://img.example/{name}.png"),
        description: format!("{name} does something dramatic."),
    }
}

/// Helper to build an entry with a base skin plus named alternates
fn make_entry(name: &str, nickname: &str, alternate_skins: &[&str]) -> Entry {
    let mut skins = vec![Skin {
        name: DEFAULT_SKIN_NAME.to_string(),
        splash: format!("https://img.example/{name}_0.jpg"),
    }];
    for (i, skin_name) in alternate_skins.iter().enumerate() {
        skins.push(Skin {
            name: (*skin_name).to_string(),
            splash: format!("https://img.example/{}_{}.jpg", name, i + 1),
        });
    }

    Entry {
        name: name.to_string(),
        nickname: nickname.to_string(),
        icon: format!("https://img.example/{name}.png"),
        skins,
        abilities: Abilities {
            passive: make_ability("Passive"),
            q: make_ability("Q"),
            w: make_ability("W"),
            e: make_ability("E"),
            r: make_ability("R"),
        },
    }
}

/// Helper to build a small roster in upstream document order
///
/// The order is deliberately not alphabetical so ordering bugs show up.
fn make_roster() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Zed".to_string(),
        make_entry("Zed", "the Master of Shadows", &["Shockblade Zed"]),
    );
    catalog.insert(
        "Aatrox".to_string(),
        make_entry("Aatrox", "the Darkin Blade", &["Blood Moon Aatrox"]),
    );
    catalog.insert(
        "Ahri".to_string(),
        make_entry(
            "Ahri",
            "the Nine-Tailed Fox",
            &["Star Guardian Ahri", "Spirit Blossom Ahri"],
        ),
    );
    catalog.insert(
        "MissFortune".to_string(),
        make_entry("Miss Fortune", "the Bounty Hunter", &[]),
    );
    catalog
}

fn make_info() -> FetchInfo {
    FetchInfo {
        patch: "15.1.1".to_string(),
        locale: "en_US".to_string(),
        fetched_at: Utc::now(),
    }
}

/// Wire both controllers the way the browse view does
fn make_browse(catalog: Catalog) -> (SearchController, PanelController, SignalBus) {
    (
        SearchController::new(Arc::new(catalog)),
        PanelController::new(),
        SignalBus::new(),
    )
}

#[test]
fn test_store_round_trip_preserves_document_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::with_root(dir.path().to_path_buf(), None);
    let catalog = make_roster();

    store.store(&catalog, &make_info()).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, catalog);
    assert_eq!(
        loaded.ids(),
        &[
            "Zed".to_string(),
            "Aatrox".to_string(),
            "Ahri".to_string(),
            "MissFortune".to_string(),
        ]
    );

    let status = store.status();
    assert!(status.is_cached());
    assert_eq!(status.info.unwrap().patch, "15.1.1");
}

#[test]
fn test_query_to_open_panel_flow() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    for c in "ahri".chars() {
        search.query_push(c);
    }
    assert_eq!(search.results, vec!["Ahri".to_string()]);

    search.confirm_selection(&mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);

    // One dispatch settles the whole cascade: selection, data request,
    // and the resolved record
    assert!(bus.is_empty());
    assert!(panel.is_open);
    assert_eq!(panel.current_id.as_deref(), Some("Ahri"));
    assert_eq!(panel.entry.as_ref().unwrap().name, "Ahri");
    assert_eq!(panel.sibling_ids.len(), 4);

    assert_eq!(search.selected_id.as_deref(), Some("Ahri"));
    assert!(search.query.is_empty());
    assert!(search.results.is_empty());
}

#[test]
fn test_sibling_navigation_resolves_each_record() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    search.select_by_id("Zed", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert!(panel.at_first());

    panel.next_entry(&mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert_eq!(panel.current_id.as_deref(), Some("Aatrox"));
    assert_eq!(panel.entry.as_ref().unwrap().nickname, "the Darkin Blade");
    assert!(!panel.at_first());

    // Clamped at the first sibling
    panel.prev_entry(&mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert_eq!(panel.current_id.as_deref(), Some("Zed"));

    panel.prev_entry(&mut bus);
    assert!(bus.is_empty());
    assert_eq!(panel.current_id.as_deref(), Some("Zed"));

    // Walk to the far end and confirm the clamp there too
    for _ in 0..10 {
        panel.next_entry(&mut bus);
        dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    }
    assert_eq!(panel.current_id.as_deref(), Some("MissFortune"));
    assert!(panel.at_last());
    assert_eq!(panel.entry.as_ref().unwrap().name, "Miss Fortune");
}

#[test]
fn test_card_toggle_closes_panel_and_selection() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    search.card_activated("Aatrox", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert!(panel.is_open);
    assert_eq!(search.selected_id.as_deref(), Some("Aatrox"));

    search.card_activated("Aatrox", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert!(!panel.is_open);
    assert!(panel.entry.is_none());
    assert_eq!(search.selected_id, None);
}

#[test]
fn test_closing_panel_clears_grid_selection() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    search.select_by_id("Ahri", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert!(panel.is_open);

    panel.close(&mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert!(!panel.is_open);
    assert_eq!(search.selected_id, None);
}

#[test]
fn test_unknown_selection_leaves_panel_closed() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    search.select_by_id("Teemo", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);

    assert!(bus.is_empty());
    assert!(!panel.is_open);
    assert_eq!(search.selected_id, None);
}

#[test]
fn test_skin_carousel_through_the_panel() {
    let (mut search, mut panel, mut bus) = make_browse(make_roster());

    search.select_by_id("Ahri", &mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);

    assert_eq!(panel.skin_count(), 3);
    assert_eq!(panel.caption(), Some("Ahri"));
    assert_eq!(panel.preload_targets().len(), 1);

    panel.next_skin();
    assert_eq!(panel.caption(), Some("Star Guardian Ahri"));
    assert_eq!(panel.preload_targets().len(), 2);

    panel.next_skin();
    panel.next_skin();
    assert_eq!(panel.caption(), Some("Ahri"));

    // Opening a sibling resets the carousel
    panel.next_skin();
    panel.next_entry(&mut bus);
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);
    assert_eq!(panel.current_id.as_deref(), Some("MissFortune"));
    assert_eq!(panel.skin_index, 0);
    assert_eq!(panel.caption(), Some("Miss Fortune"));
}

#[test]
fn test_refresh_broadcast_swaps_the_catalog() {
    let (mut search, mut panel, mut bus) = make_browse(Catalog::new());

    search.on_query_change("zed");
    assert!(search.results.is_empty());

    bus.publish(Signal::DataReady(Arc::new(make_roster())));
    dispatch_all(&mut bus, &mut [&mut search, &mut panel]);

    search.on_query_change("zed");
    assert_eq!(search.results, vec!["Zed".to_string()]);
}

#[test]
fn test_roster_commands_run_against_a_cached_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::with_root(dir.path().join("cache"), None);
    store.store(&make_roster(), &make_info()).unwrap();

    let catalog = store.load().unwrap();

    commands::list(&catalog, true).unwrap();
    commands::show(&catalog, "Zed", true).unwrap();
    assert!(commands::show(&catalog, "Teemo", true).is_err());

    let json_path = dir.path().join("out.json");
    commands::export(&catalog, ExportFormat::Json, Some(json_path.as_path()), true).unwrap();
    let exported: Catalog =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(exported, catalog);
    assert_eq!(exported.ids(), catalog.ids());

    let csv_path = dir.path().join("out.csv");
    commands::export(&catalog, ExportFormat::Csv, Some(csv_path.as_path()), true).unwrap();
    let csv_text = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), catalog.len() + 1);
    assert!(csv_text.starts_with("id,name,nickname,skins"));
}

#[test]
fn test_cleared_cache_reports_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::with_root(dir.path().join("cache"), None);
    store.store(&make_roster(), &make_info()).unwrap();

    assert!(store.clear().unwrap());
    assert!(!store.status().is_cached());
    assert!(store.load().is_err());
}
