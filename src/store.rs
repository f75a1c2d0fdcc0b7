//! Data directory manager for persisted builds and decks.
//!
//! Owns the directory where build and deck files live and derives filenames
//! deterministically from display names: lowercase, spaces replaced with
//! underscores, suffixed `_build` or `_deck`, with a `.json` extension.
//! One entity per file, whole-file replace on save.

use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::models::{Build, Deck};

/// Manages the on-disk data directory for builds and decks.
pub struct DataStore {
    /// Directory where build and deck files are stored.
    pub data_dir: PathBuf,
}

impl DataStore {
    /// Create a store rooted at `data_dir`.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data
    /// directory. Creates the directory if it does not exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    /// Path where the build named `name` is (or would be) stored.
    pub fn build_path(&self, name: &str) -> PathBuf {
        self.entity_path(name, config::BUILD_SUFFIX)
    }

    /// Path where the deck named `name` is (or would be) stored.
    pub fn deck_path(&self, name: &str) -> PathBuf {
        self.entity_path(name, config::DECK_SUFFIX)
    }

    fn entity_path(&self, name: &str, suffix: &str) -> PathBuf {
        let filename = format!("{}{}.{}", slug(name), suffix, config::FILE_EXT);
        self.data_dir.join(filename)
    }

    /// Save `build` under its own name. Returns the file path written.
    pub fn save_build(&self, build: &Build) -> Result<PathBuf> {
        let path = self.build_path(build.name());
        build.save(&path)?;
        Ok(path)
    }

    /// Load the build named `name`.
    ///
    /// Returns `NotFound` if no such build has been saved.
    pub fn load_build(&self, name: &str) -> Result<Build> {
        Build::load(&self.build_path(name))
    }

    /// Save `deck` under the display name `name`. Returns the file path
    /// written. Decks carry no name of their own, so the caller supplies one.
    pub fn save_deck(&self, name: &str, deck: &Deck) -> Result<PathBuf> {
        let path = self.deck_path(name);
        deck.save(&path)?;
        Ok(path)
    }

    /// Load the deck named `name`.
    ///
    /// Returns `NotFound` if no such deck has been saved.
    pub fn load_deck(&self, name: &str) -> Result<Deck> {
        Deck::load(&self.deck_path(name))
    }

    /// Slugs of all saved builds, sorted. Each entry can be passed back to
    /// [`load_build`](DataStore::load_build).
    pub fn list_builds(&self) -> Result<Vec<String>> {
        self.list_entities(config::BUILD_SUFFIX)
    }

    /// Slugs of all saved decks, sorted.
    pub fn list_decks(&self) -> Result<Vec<String>> {
        self.list_entities(config::DECK_SUFFIX)
    }

    fn list_entities(&self, suffix: &str) -> Result<Vec<String>> {
        let ending = format!("{}.{}", suffix, config::FILE_EXT);
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.data_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name();
            if let Some(name) = filename.to_str().and_then(|f| f.strip_suffix(&ending)) {
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl std::fmt::Display for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DataStore(data_dir={})", self.data_dir.display())
    }
}

/// Derive the filename slug for a display name: lowercase, spaces replaced
/// with underscores.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
