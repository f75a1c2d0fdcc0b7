//! Quantity-tracked deck of perk cards, independent of any build.
//!
//! A deck is a multiset keyed by `(card name, stars)`. Quantities are always
//! at least 1; an entry is deleted outright when its quantity reaches zero,
//! never stored at 0. Persisted as a whole-file JSON snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::card::CardKind;

/// Quantities keyed by `(name, stars)`. A `BTreeMap` keeps iteration sorted
/// by name then stars, which makes `describe()` deterministic for free.
type DeckContents = BTreeMap<(String, u8), u32>;

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// A deck of perk cards of one tier (normal or legendary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: CardKind,
    #[serde(with = "contents_as_entries")]
    cards: DeckContents,
}

impl Deck {
    /// Create an empty deck of the given kind.
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            cards: DeckContents::new(),
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Number of distinct `(name, stars)` entries.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add one copy of the `(name, stars)` card, creating the entry at
    /// quantity 1 if absent. Always succeeds.
    pub fn add_card(&mut self, name: &str, stars: u8) {
        *self.cards.entry((name.to_string(), stars)).or_insert(0) += 1;
    }

    /// Remove one copy of the `(name, stars)` card.
    ///
    /// The entry is deleted when its quantity reaches zero. Returns
    /// `InvalidOperation` if the deck holds no such card; the contents are
    /// left untouched in that case.
    pub fn remove_card(&mut self, name: &str, stars: u8) -> Result<()> {
        let key = (name.to_string(), stars);
        match self.cards.get_mut(&key) {
            Some(qty) if *qty > 1 => {
                *qty -= 1;
                Ok(())
            }
            Some(_) => {
                self.cards.remove(&key);
                Ok(())
            }
            None => Err(PlannerError::InvalidOperation(format!(
                "no {}-star {} card to remove",
                stars, name
            ))),
        }
    }

    /// Whether the deck currently holds at least one `(name, stars)` card.
    pub fn find_card(&self, name: &str, stars: u8) -> bool {
        self.cards.contains_key(&(name.to_string(), stars))
    }

    /// Quantity held for `(name, stars)`, 0 if absent.
    pub fn quantity(&self, name: &str, stars: u8) -> u32 {
        self.cards
            .get(&(name.to_string(), stars))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate over entries in `(name, stars)` ascending order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u8, u32)> {
        self.cards
            .iter()
            .map(|((name, stars), qty)| (name.as_str(), *stars, *qty))
    }

    /// Deterministic listing of the deck, one line per entry, sorted by
    /// `(name, stars)` ascending.
    pub fn describe(&self) -> String {
        if self.cards.is_empty() {
            return "(deck is empty)".to_string();
        }

        let label = match self.kind {
            CardKind::Normal => "Normal",
            CardKind::Legendary => "Legendary",
        };
        let mut out = format!("{} deck:", label);
        for ((name, stars), qty) in &self.cards {
            out.push_str(&format!("\n  {}x {} ({}-star)", qty, name, stars));
        }
        out
    }

    /// Write the deck to `path` as pretty-printed JSON.
    ///
    /// Whole-file replace: writes to a temp file next to the target and
    /// renames on success, so an interrupted write never leaves a corrupt
    /// partial file behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load a deck from `path`.
    ///
    /// Returns `NotFound` if the file does not exist.
    pub fn load(path: &Path) -> Result<Deck> {
        if !path.exists() {
            return Err(PlannerError::NotFound(format!(
                "no deck file at {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Serde adapter persisting the contents map as a list of
/// `[[name, stars], quantity]` entries. Tuple keys cannot be JSON object
/// keys, and round-trip only needs to preserve the mapping, not any order.
mod contents_as_entries {
    use super::DeckContents;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(cards: &DeckContents, ser: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(&(String, u8), &u32)> = cards.iter().collect();
        entries.serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DeckContents, D::Error> {
        let entries: Vec<((String, u8), u32)> = Vec::deserialize(de)?;
        Ok(entries.into_iter().collect())
    }
}
