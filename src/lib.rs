//! Perk planner library for Fallout 76 character builds.
//!
//! Models perk cards, quantity-tracked decks, and named builds with their
//! derived S.P.E.C.I.A.L. point tally, and persists each as a JSON file in
//! a managed data directory. Presentation (menus, prompts, styling) is left
//! to the caller; every operation here takes plain data and returns plain
//! data or strings.
//!
//! # Quick start
//!
//! ```no_run
//! use perk_planner::{Build, CardKind, DataStore, PerkCard, Special};
//!
//! let store = DataStore::new(None).unwrap();
//!
//! let mut build = Build::new("Bloodied Commando");
//! build.add_normal_card(PerkCard::with_special(
//!     "Adrenaline",
//!     3,
//!     CardKind::Normal,
//!     Special::A,
//! ));
//! assert_eq!(build.points(Special::A), 3);
//!
//! store.save_build(&build).unwrap();
//! let reloaded = store.load_build("Bloodied Commando").unwrap();
//! assert_eq!(reloaded.points(Special::A), 3);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::{PlannerError, Result};
pub use models::{Build, CardKind, Deck, PerkCard, Special};
pub use store::DataStore;
