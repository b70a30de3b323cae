//! Armor inventory loader.

use std::path::Path;

use loadout_core::{ArmorPiece, ArmorSlot, PieceId, StatKind, StatVector};
use serde::{Deserialize, Serialize};

use crate::class::CharacterClass;
use crate::loaders::{LoadResult, read_file};
use crate::source::StaticArmorSource;

/// One owned piece as it appears in an inventory file.
///
/// ```ron
/// (id: 42, class: hunter, slot: helmet, exotic: true, stats: (2, 30, 10, 2, 20, 2))
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorRecord {
    pub id: PieceId,
    pub class: CharacterClass,
    pub slot: ArmorSlot,
    #[serde(default)]
    pub exotic: bool,
    /// Stats in mobility, resilience, recovery, discipline, intellect,
    /// strength order.
    pub stats: StatVector,
    #[serde(default)]
    pub masterworked: bool,
    #[serde(default)]
    pub artifice: Option<StatKind>,
}

impl ArmorRecord {
    pub fn into_entry(self) -> (CharacterClass, ArmorPiece) {
        let piece = ArmorPiece {
            id: self.id,
            slot: self.slot,
            is_exotic: self.exotic,
            raw_stats: self.stats,
            has_masterwork_bonus: self.masterworked,
            artifice_stat: self.artifice,
        };
        (self.class, piece)
    }
}

/// Inventory file structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub armor: Vec<ArmorRecord>,
}

impl Inventory {
    pub fn into_source(self) -> StaticArmorSource {
        self.armor.into_iter().map(ArmorRecord::into_entry).collect()
    }
}

/// Loader for armor inventories from RON files.
pub struct ArmorLoader;

impl ArmorLoader {
    /// Load an inventory from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an [`Inventory`]
    pub fn load(path: &Path) -> LoadResult<StaticArmorSource> {
        let inventory = Self::load_inventory(path)?;
        tracing::debug!(
            path = %path.display(),
            pieces = inventory.armor.len(),
            "loaded armor inventory"
        );
        Ok(inventory.into_source())
    }

    /// Load the raw records without building a source.
    pub fn load_inventory(path: &Path) -> LoadResult<Inventory> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Inventory> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse armor inventory RON: {}", e))
    }
}
