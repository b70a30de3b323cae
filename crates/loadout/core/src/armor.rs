//! Armor pieces and equipment slots.

use core::fmt;

use crate::stats::{StatKind, StatVector, effective_stats};

/// Stable, opaque identity of an owned armor piece.
///
/// Only used for result projection and deterministic tie-breaking, never
/// for scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Armor equipment position. A loadout fills each slot exactly once.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArmorSlot {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
}

impl ArmorSlot {
    pub const COUNT: usize = 5;

    /// All slots in canonical loadout order.
    pub const ALL: [ArmorSlot; Self::COUNT] = [
        ArmorSlot::Helmet,
        ArmorSlot::Gauntlets,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::ClassItem,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn flag(self) -> SlotSet {
        match self {
            ArmorSlot::Helmet => SlotSet::HELMET,
            ArmorSlot::Gauntlets => SlotSet::GAUNTLETS,
            ArmorSlot::Chest => SlotSet::CHEST,
            ArmorSlot::Legs => SlotSet::LEGS,
            ArmorSlot::ClassItem => SlotSet::CLASS_ITEM,
        }
    }
}

bitflags::bitflags! {
    /// Set of armor slots, used to describe slot groups.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotSet: u8 {
        const HELMET = 1 << 0;
        const GAUNTLETS = 1 << 1;
        const CHEST = 1 << 2;
        const LEGS = 1 << 3;
        const CLASS_ITEM = 1 << 4;
    }
}

impl SlotSet {
    /// Slots in this set, in canonical order.
    pub fn slots(self) -> impl Iterator<Item = ArmorSlot> {
        ArmorSlot::ALL
            .into_iter()
            .filter(move |slot| self.contains(slot.flag()))
    }
}

impl From<ArmorSlot> for SlotSet {
    fn from(slot: ArmorSlot) -> Self {
        slot.flag()
    }
}

impl FromIterator<ArmorSlot> for SlotSet {
    fn from_iter<I: IntoIterator<Item = ArmorSlot>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SlotSet::empty(), |set, slot| set | slot.flag())
    }
}

/// One concrete armor item a player owns, already resolved from the remote
/// inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorPiece {
    pub id: PieceId,
    pub slot: ArmorSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_exotic: bool,
    pub raw_stats: StatVector,
    /// The +2 masterwork bonus is already included in `raw_stats`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_masterwork_bonus: bool,
    /// Stat receiving the artifice bonus, if this is an artifice piece.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artifice_stat: Option<StatKind>,
}

impl ArmorPiece {
    /// Creates a plain (legendary, non-masterworked, non-artifice) piece.
    pub fn new(id: PieceId, slot: ArmorSlot, raw_stats: StatVector) -> Self {
        Self {
            id,
            slot,
            is_exotic: false,
            raw_stats,
            has_masterwork_bonus: false,
            artifice_stat: None,
        }
    }

    #[must_use]
    pub fn with_exotic(mut self) -> Self {
        self.is_exotic = true;
        self
    }

    #[must_use]
    pub fn with_masterwork(mut self) -> Self {
        self.has_masterwork_bonus = true;
        self
    }

    #[must_use]
    pub fn with_artifice(mut self, stat: StatKind) -> Self {
        self.artifice_stat = Some(stat);
        self
    }

    /// Stats this piece contributes to a loadout.
    pub fn effective_stats(&self, assume_masterwork: bool) -> StatVector {
        effective_stats(self, assume_masterwork)
    }
}
