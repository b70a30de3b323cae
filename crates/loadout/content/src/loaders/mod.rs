//! Content loaders for reading inventories and settings from files.
//!
//! Armor inventories are RON, objectives and optimizer settings are TOML.

pub mod armor;
pub mod config;
pub mod factory;
pub mod objectives;

pub use armor::{ArmorLoader, ArmorRecord, Inventory};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use objectives::ObjectivesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
