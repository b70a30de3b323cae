//! Optimizer configuration loader.

use std::path::Path;

use loadout_core::OptimizerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for optimizer configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing OptimizerConfig
    ///
    /// # Returns
    ///
    /// Returns an OptimizerConfig. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<OptimizerConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<OptimizerConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
