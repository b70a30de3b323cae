//! Where a character's armor pool comes from.

use loadout_core::{ArmorPiece, ArmorSlot, PieceId};

use crate::class::CharacterClass;

/// Read-only view of a player's owned armor.
///
/// Implementations resolve whatever backs the inventory (a data file, a
/// cached remote profile) into plain pieces. The optimizer only ever sees
/// the pool for a single class.
pub trait ArmorSource: Send + Sync {
    /// Every piece the given class can equip, in a stable order.
    fn pool(&self, class: CharacterClass) -> Vec<ArmorPiece>;

    /// Looks up one piece regardless of class.
    fn piece(&self, id: PieceId) -> Option<&ArmorPiece>;

    /// Pieces of `class` in `slot`.
    fn pieces_in_slot(&self, class: CharacterClass, slot: ArmorSlot) -> Vec<ArmorPiece> {
        self.pool(class)
            .into_iter()
            .filter(|piece| piece.slot == slot)
            .collect()
    }
}

/// In-memory inventory, typically built from a loaded data file.
#[derive(Clone, Debug, Default)]
pub struct StaticArmorSource {
    entries: Vec<(CharacterClass, ArmorPiece)>,
}

impl StaticArmorSource {
    pub fn new(entries: Vec<(CharacterClass, ArmorPiece)>) -> Self {
        Self { entries }
    }

    /// Adds a piece owned by `class`.
    pub fn insert(&mut self, class: CharacterClass, piece: ArmorPiece) {
        self.entries.push((class, piece));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(CharacterClass, ArmorPiece)> for StaticArmorSource {
    fn from_iter<I: IntoIterator<Item = (CharacterClass, ArmorPiece)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ArmorSource for StaticArmorSource {
    fn pool(&self, class: CharacterClass) -> Vec<ArmorPiece> {
        self.entries
            .iter()
            .filter(|(owner, _)| *owner == class)
            .map(|(_, piece)| piece.clone())
            .collect()
    }

    fn piece(&self, id: PieceId) -> Option<&ArmorPiece> {
        self.entries
            .iter()
            .map(|(_, piece)| piece)
            .find(|piece| piece.id == id)
    }
}
