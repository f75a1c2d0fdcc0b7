//! Character build: named rosters of normal and legendary perk cards plus
//! the derived S.P.E.C.I.A.L. point tally.
//!
//! The tally is the build's central invariant: for every letter it equals
//! the summed stars of the normal cards carrying that letter, accumulated at
//! the moment each card is added. Legendary cards and cards without an
//! attribute never touch it. Loading a persisted build replays the card
//! additions rather than trusting the stored tally, so the invariant holds
//! even for hand-edited or stale files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{PlannerError, Result};
use crate::models::card::{PerkCard, Special};

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

/// A named character build.
///
/// Fields are private so the point tally can only change through
/// [`add_normal_card`](Build::add_normal_card); read access goes through the
/// accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    name: String,
    normal_cards: Vec<PerkCard>,
    legendary_cards: Vec<PerkCard>,
    #[serde(default)]
    special_points: BTreeMap<Special, u32>,
}

impl Build {
    /// Create an empty build with an all-zero tally.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            normal_cards: Vec::new(),
            legendary_cards: Vec::new(),
            special_points: Special::ALL.iter().map(|&s| (s, 0)).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normal-tier cards in insertion order. Duplicates allowed.
    pub fn normal_cards(&self) -> &[PerkCard] {
        &self.normal_cards
    }

    /// Legendary-tier cards in insertion order.
    pub fn legendary_cards(&self) -> &[PerkCard] {
        &self.legendary_cards
    }

    /// Accumulated points for one attribute.
    pub fn points(&self, special: Special) -> u32 {
        self.special_points.get(&special).copied().unwrap_or(0)
    }

    /// The full tally, keyed in canonical S.P.E.C.I.A.L. order.
    pub fn special_points(&self) -> &BTreeMap<Special, u32> {
        &self.special_points
    }

    /// Append a normal card; if it carries a S.P.E.C.I.A.L. attribute, add
    /// its stars to that attribute's points.
    pub fn add_normal_card(&mut self, card: PerkCard) {
        if let Some(special) = card.special {
            *self.special_points.entry(special).or_insert(0) += u32::from(card.stars);
        }
        self.normal_cards.push(card);
    }

    /// Append a legendary card. Never affects the point tally.
    pub fn add_legendary_card(&mut self, card: PerkCard) {
        self.legendary_cards.push(card);
    }

    /// Deterministic textual report: build name, each attribute in
    /// S.P.E.C.I.A.L. order with its points and contributing normal cards,
    /// then the legendary roster.
    pub fn summary(&self) -> String {
        let mut out = format!("Build: {}\n\nS.P.E.C.I.A.L. points:", self.name);

        for special in Special::ALL {
            out.push_str(&format!("\n  {}: {}", special, self.points(special)));
            for card in self
                .normal_cards
                .iter()
                .filter(|c| c.special == Some(special))
            {
                out.push_str(&format!("\n    - {} ({}-star)", card.name, card.stars));
            }
        }

        out.push_str("\n\nLegendary perks:");
        if self.legendary_cards.is_empty() {
            out.push_str("\n  (none)");
        } else {
            for card in &self.legendary_cards {
                out.push_str(&format!("\n  - {} ({}-star)", card.name, card.stars));
            }
        }

        out
    }

    /// Write the build to `path` as pretty-printed JSON.
    ///
    /// The snapshot is self-contained: name, both rosters, and the point
    /// tally. Whole-file replace via temp file + rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Load a build from `path`, replaying every card addition.
    ///
    /// The persisted `special_points` field is accepted for format
    /// compatibility but discarded: the tally is recomputed from the cards,
    /// so it always matches the roster regardless of what the file claims.
    ///
    /// Returns `NotFound` if the file does not exist.
    pub fn load(path: &Path) -> Result<Build> {
        if !path.exists() {
            return Err(PlannerError::NotFound(format!(
                "no build file at {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        let snapshot: Build = serde_json::from_str(&contents)?;

        let mut build = Build::new(snapshot.name);
        for card in snapshot.normal_cards {
            build.add_normal_card(card);
        }
        for card in snapshot.legendary_cards {
            build.add_legendary_card(card);
        }
        Ok(build)
    }
}
