//! Objectives loader.

use std::path::Path;

use loadout_core::Objectives;

use crate::loaders::{LoadResult, read_file};

/// Loader for optimization objectives from TOML files.
///
/// ```toml
/// stat_priority = [0, 4, 3, 2, 0, 1]
/// max_exotics = 1
/// assume_masterwork = true
/// ```
pub struct ObjectivesLoader;

impl ObjectivesLoader {
    /// Load objectives from a TOML file.
    ///
    /// Parsing does not validate; weights and exotic budget are checked by
    /// the optimizer.
    pub fn load(path: &Path) -> LoadResult<Objectives> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Objectives> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse objectives TOML: {}", e))
    }
}
