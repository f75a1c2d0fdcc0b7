//! DataStore filename derivation, directory handling, and listing.

mod common;

use common::{legendary_card, normal_card};
use perk_planner::{Build, CardKind, DataStore, Deck, Special};

// ---------------------------------------------------------------------------
// path derivation
// ---------------------------------------------------------------------------

#[test]
fn build_path_is_slug_with_suffix_and_extension() {
    let (store, _tmp) = common::setup_store();
    let path = store.build_path("Bloodied Build");
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "bloodied_build_build.json"
    );
    assert!(path.starts_with(&store.data_dir));
}

#[test]
fn deck_path_is_slug_with_suffix_and_extension() {
    let (store, _tmp) = common::setup_store();
    let path = store.deck_path("My Raid Deck");
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "my_raid_deck_deck.json"
    );
}

#[test]
fn slug_lowercases_and_replaces_spaces() {
    assert_eq!(perk_planner::store::slug("Bloodied Commando"), "bloodied_commando");
    assert_eq!(perk_planner::store::slug("solo"), "solo");
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_missing_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("planner-data");
    assert!(!dir.exists());

    let store = DataStore::new(Some(dir.clone())).unwrap();
    assert!(dir.is_dir());
    assert_eq!(store.data_dir, dir);
}

// ---------------------------------------------------------------------------
// save / load round trips through the store
// ---------------------------------------------------------------------------

#[test]
fn save_build_returns_written_path() {
    let (store, _tmp) = common::setup_store();
    let build = Build::new("Solo Sniper");

    let path = store.save_build(&build).unwrap();
    assert!(path.is_file());
    assert_eq!(path, store.build_path("Solo Sniper"));
}

#[test]
fn build_round_trip_by_display_name() {
    let (store, _tmp) = common::setup_store();

    let mut build = Build::new("Junkie Rifleman");
    build.add_normal_card(normal_card("Tank Killer", 3, Special::P));
    build.add_legendary_card(legendary_card("What Rads?", 4));
    store.save_build(&build).unwrap();

    // Lookup is slug-based, so the exact display name finds the file.
    let loaded = store.load_build("Junkie Rifleman").unwrap();
    assert_eq!(loaded.name(), "Junkie Rifleman");
    assert_eq!(loaded.points(Special::P), 3);
}

#[test]
fn deck_round_trip_by_display_name() {
    let (store, _tmp) = common::setup_store();

    let mut deck = Deck::new(CardKind::Legendary);
    deck.add_card("What Rads?", 4);
    store.save_deck("Spares", &deck).unwrap();

    let loaded = store.load_deck("Spares").unwrap();
    assert_eq!(loaded, deck);
}

// ---------------------------------------------------------------------------
// list_builds / list_decks
// ---------------------------------------------------------------------------

#[test]
fn listing_returns_sorted_slugs_per_entity_kind() {
    let (store, _tmp) = common::setup_store();

    store.save_build(&Build::new("Zeta Hunter")).unwrap();
    store.save_build(&Build::new("Bloodied Commando")).unwrap();
    store
        .save_deck("Spares", &Deck::new(CardKind::Normal))
        .unwrap();

    assert_eq!(
        store.list_builds().unwrap(),
        vec!["bloodied_commando", "zeta_hunter"]
    );
    assert_eq!(store.list_decks().unwrap(), vec!["spares"]);
}

#[test]
fn listing_empty_store_is_empty() {
    let (store, _tmp) = common::setup_store();
    assert!(store.list_builds().unwrap().is_empty());
    assert!(store.list_decks().unwrap().is_empty());
}

#[test]
fn listed_slug_loads_the_build() {
    let (store, _tmp) = common::setup_store();
    store.save_build(&Build::new("Bloodied Commando")).unwrap();

    let slugs = store.list_builds().unwrap();
    let loaded = store.load_build(&slugs[0]).unwrap();
    assert_eq!(loaded.name(), "Bloodied Commando");
}
