use std::path::PathBuf;

/// Extension used for all persisted build and deck files.
pub const FILE_EXT: &str = "json";

/// Filename suffix appended to a build's slug.
pub const BUILD_SUFFIX: &str = "_build";

/// Filename suffix appended to a deck's slug.
pub const DECK_SUFFIX: &str = "_deck";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("perk-planner")
    } else {
        PathBuf::from("data")
    }
}
