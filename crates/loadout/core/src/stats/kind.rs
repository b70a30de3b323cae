//! The six armor stats.

/// Number of independent armor stats.
pub const STAT_COUNT: usize = 6;

/// One dimension of the armor stat vector.
///
/// Declaration order is the canonical storage order of [`super::StatVector`]
/// and of every per-stat array (weights, tiers).
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
pub enum StatKind {
    Mobility,
    /// Health in some client builds.
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl StatKind {
    /// All stats in storage order.
    pub const ALL: [StatKind; STAT_COUNT] = [
        StatKind::Mobility,
        StatKind::Resilience,
        StatKind::Recovery,
        StatKind::Discipline,
        StatKind::Intellect,
        StatKind::Strength,
    ];

    /// Position of this stat inside per-stat arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`StatKind::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_in_declaration_order() {
        for (i, stat) in StatKind::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
            assert_eq!(StatKind::from_index(i), Some(*stat));
        }
        assert_eq!(StatKind::from_index(STAT_COUNT), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Intellect".parse::<StatKind>(), Ok(StatKind::Intellect));
        assert_eq!("STRENGTH".parse::<StatKind>(), Ok(StatKind::Strength));
        assert_eq!(StatKind::Discipline.to_string(), "discipline");
    }
}
