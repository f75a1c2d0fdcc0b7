//! Perk card model: the S.P.E.C.I.A.L. attribute alphabet, the two card
//! kinds, and the `PerkCard` record itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Special — The seven S.P.E.C.I.A.L. attributes
// ---------------------------------------------------------------------------

/// One of the seven S.P.E.C.I.A.L. attributes.
///
/// Variant order is the canonical S.P.E.C.I.A.L. order, so the derived `Ord`
/// gives the fixed ordering used by reports and serialized point maps.
/// Serializes as its single letter, which also makes it usable as a JSON
/// map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Special {
    S,
    P,
    E,
    C,
    I,
    A,
    L,
}

impl Special {
    /// All seven attributes in canonical S.P.E.C.I.A.L. order.
    pub const ALL: [Special; 7] = [
        Special::S,
        Special::P,
        Special::E,
        Special::C,
        Special::I,
        Special::A,
        Special::L,
    ];

    /// The attribute's single-letter code.
    pub fn letter(self) -> char {
        match self {
            Special::S => 'S',
            Special::P => 'P',
            Special::E => 'E',
            Special::C => 'C',
            Special::I => 'I',
            Special::A => 'A',
            Special::L => 'L',
        }
    }

    /// Parse a single-letter code (case-insensitive).
    ///
    /// Returns `None` for anything outside the seven recognized letters.
    pub fn from_letter(letter: char) -> Option<Special> {
        match letter.to_ascii_uppercase() {
            'S' => Some(Special::S),
            'P' => Some(Special::P),
            'E' => Some(Special::E),
            'C' => Some(Special::C),
            'I' => Some(Special::I),
            'A' => Some(Special::A),
            'L' => Some(Special::L),
            _ => None,
        }
    }
}

impl fmt::Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ---------------------------------------------------------------------------
// CardKind — Normal vs. legendary tier
// ---------------------------------------------------------------------------

/// The two perk-card tiers. Also used as the deck kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Normal,
    Legendary,
}

impl CardKind {
    /// Star ceiling for this tier (5 for normal, 4 for legendary).
    ///
    /// Exposed for callers that validate input; the models themselves do not
    /// enforce it.
    pub fn max_stars(self) -> u8 {
        match self {
            CardKind::Normal => 5,
            CardKind::Legendary => 4,
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Normal => write!(f, "normal"),
            CardKind::Legendary => write!(f, "legendary"),
        }
    }
}

// ---------------------------------------------------------------------------
// PerkCard — A single perk card
// ---------------------------------------------------------------------------

/// A single perk card.
///
/// Plain data, immutable in practice once constructed: nothing mutates the
/// name, stars, kind, or attribute after the fact. The `builds` set is an
/// advisory back-reference ("which builds use this card") that callers may
/// append to; it is not a live link to any `Build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkCard {
    pub name: String,
    pub stars: u8,
    pub kind: CardKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<Special>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub builds: BTreeSet<String>,
}

impl PerkCard {
    /// Create a card with no attribute affinity and no build references.
    pub fn new(name: impl Into<String>, stars: u8, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            stars,
            kind,
            special: None,
            builds: BTreeSet::new(),
        }
    }

    /// Create a card tied to a S.P.E.C.I.A.L. attribute.
    pub fn with_special(
        name: impl Into<String>,
        stars: u8,
        kind: CardKind,
        special: Special,
    ) -> Self {
        Self {
            name: name.into(),
            stars,
            kind,
            special: Some(special),
            builds: BTreeSet::new(),
        }
    }
}

impl fmt::Display for PerkCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let special = self
            .special
            .map(|s| s.letter().to_string())
            .unwrap_or_else(|| "-".to_string());
        let builds = if self.builds.is_empty() {
            "none".to_string()
        } else {
            self.builds.iter().cloned().collect::<Vec<_>>().join(", ")
        };
        write!(
            f,
            "{} ({}-star {}, SPECIAL: {}, used in builds: {})",
            self.name, self.stars, self.kind, special, builds
        )
    }
}
