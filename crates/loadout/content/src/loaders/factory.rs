//! Content factory for loading everything an optimizer run needs.

use std::path::{Path, PathBuf};

use loadout_core::{Objectives, OptimizerConfig};

use crate::loaders::{ArmorLoader, ConfigLoader, LoadResult, ObjectivesLoader};
use crate::source::StaticArmorSource;

/// Content factory that loads inventories and settings from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── objectives.toml
/// └── armor.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const OBJECTIVES_FILE: &'static str = "objectives.toml";
    pub const ARMOR_FILE: &'static str = "armor.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load optimizer configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<OptimizerConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(OptimizerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load objectives from `objectives.toml`.
    pub fn load_objectives(&self) -> LoadResult<Objectives> {
        let path = self.data_dir.join(Self::OBJECTIVES_FILE);
        ObjectivesLoader::load(&path)
    }

    /// Load the armor inventory from `armor.ron`.
    pub fn load_armor(&self) -> LoadResult<StaticArmorSource> {
        let path = self.data_dir.join(Self::ARMOR_FILE);
        ArmorLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
