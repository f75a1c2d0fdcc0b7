//! Shared test fixtures for the perk-planner integration tests.
//!
//! Provides `setup_store()` which creates a `DataStore` rooted in a fresh
//! temporary directory, plus sample card constructors.

// Each test binary compiles its own copy of this module and uses a subset
// of the fixtures.
#![allow(dead_code)]

use perk_planner::{CardKind, DataStore, PerkCard, Special};

/// Create a `DataStore` backed by a temporary data directory.
///
/// Returns `(DataStore, tempfile::TempDir)`. The caller must keep the
/// `TempDir` alive for the duration of the test so the data directory is not
/// deleted prematurely.
pub fn setup_store() -> (DataStore, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let store = DataStore::new(Some(tmp_dir.path().to_path_buf())).unwrap();
    (store, tmp_dir)
}

/// A normal perk card tied to a S.P.E.C.I.A.L. attribute.
pub fn normal_card(name: &str, stars: u8, special: Special) -> PerkCard {
    PerkCard::with_special(name, stars, CardKind::Normal, special)
}

/// A legendary perk card (no attribute affinity).
pub fn legendary_card(name: &str, stars: u8) -> PerkCard {
    PerkCard::new(name, stars, CardKind::Legendary)
}
