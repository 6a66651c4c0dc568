//! Content loaders for reading battle data from files.
//!
//! Loaders convert RON/TOML files into the types the runtime feeds to the
//! core: the card catalog, the unit roster, and the battle configuration.

pub mod cards;
pub mod config;
pub mod roster;

pub use cards::CardCatalog;
pub use config::ConfigLoader;
pub use roster::{RosterLoader, UnitSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
