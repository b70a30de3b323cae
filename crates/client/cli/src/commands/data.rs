//! Data file arguments shared by every subcommand.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use loadout_content::{
    ArmorLoader, CharacterClass, ConfigLoader, ContentFactory, ObjectivesLoader,
    StaticArmorSource,
};
use loadout_core::{Objectives, OptimizerConfig};

use crate::dirs;

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Character class whose armor is used
    #[arg(short, long, value_parser = parse_class)]
    pub class: CharacterClass,

    /// Directory holding config.toml, objectives.toml and armor.ron
    /// (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR", env = "LOADOUT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Armor inventory file, overrides `<DIR>/armor.ron`
    #[arg(long, value_name = "FILE", env = "LOADOUT_ARMOR")]
    pub armor: Option<PathBuf>,

    /// Objectives file, overrides `<DIR>/objectives.toml`
    #[arg(long, value_name = "FILE", env = "LOADOUT_OBJECTIVES")]
    pub objectives: Option<PathBuf>,

    /// Optimizer config file, overrides `<DIR>/config.toml`
    #[arg(long, value_name = "FILE", env = "LOADOUT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl DataArgs {
    fn factory(&self) -> ContentFactory {
        ContentFactory::new(self.data_dir.clone().unwrap_or_else(dirs::data_dir))
    }

    pub fn load_armor(&self) -> Result<StaticArmorSource> {
        match &self.armor {
            Some(path) => ArmorLoader::load(path),
            None => self.factory().load_armor(),
        }
    }

    pub fn load_objectives(&self) -> Result<Objectives> {
        match &self.objectives {
            Some(path) => ObjectivesLoader::load(path),
            None => self.factory().load_objectives(),
        }
    }

    pub fn load_config(&self) -> Result<OptimizerConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => self.factory().load_config(),
        }
    }
}

fn parse_class(value: &str) -> Result<CharacterClass, String> {
    value.parse().map_err(|_| {
        let known: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.as_ref()).collect();
        format!("unknown class '{}', expected one of: {}", value, known.join(", "))
    })
}
