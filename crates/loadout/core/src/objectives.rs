//! Caller-supplied optimization objectives.

use crate::armor::ArmorSlot;
use crate::error::ValidationError;
use crate::stats::{STAT_COUNT, StatKind, StatWeights};

/// Objectives as received from a caller.
///
/// Fields are kept in their raw, signed form so malformed requests can be
/// reported precisely; [`Objectives::validate`] turns them into
/// [`ValidatedObjectives`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objectives {
    /// One weight per stat in [`StatKind::ALL`] order.
    pub stat_priority: Vec<i32>,
    /// Exotic budget across all slots, practically 0 or 1.
    #[cfg_attr(feature = "serde", serde(default = "Objectives::default_max_exotics"))]
    pub max_exotics: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub assume_masterwork: bool,
}

impl Objectives {
    pub const DEFAULT_MAX_EXOTICS: i32 = 1;

    pub fn new(stat_priority: [i32; STAT_COUNT]) -> Self {
        Self {
            stat_priority: stat_priority.to_vec(),
            max_exotics: Self::DEFAULT_MAX_EXOTICS,
            assume_masterwork: false,
        }
    }

    #[must_use]
    pub fn with_max_exotics(mut self, max_exotics: i32) -> Self {
        self.max_exotics = max_exotics;
        self
    }

    #[must_use]
    pub fn with_assume_masterwork(mut self, assume_masterwork: bool) -> Self {
        self.assume_masterwork = assume_masterwork;
        self
    }

    #[cfg(feature = "serde")]
    fn default_max_exotics() -> i32 {
        Self::DEFAULT_MAX_EXOTICS
    }

    /// Checks the objectives and converts them into their unsigned form.
    ///
    /// Negative weights are rejected, not clamped. An exotic budget above the
    /// number of slots is equivalent to an unlimited budget.
    pub fn validate(&self) -> Result<ValidatedObjectives, ValidationError> {
        if self.stat_priority.len() != STAT_COUNT {
            return Err(ValidationError::priority_length(self.stat_priority.len()));
        }

        let mut weights = [0u32; STAT_COUNT];
        for (stat, (&weight, out)) in StatKind::ALL
            .iter()
            .zip(self.stat_priority.iter().zip(weights.iter_mut()))
        {
            *out = u32::try_from(weight).map_err(|_| ValidationError::NegativeWeight {
                stat: *stat,
                weight,
            })?;
        }

        if self.max_exotics < 0 {
            return Err(ValidationError::NegativeMaxExotics(self.max_exotics));
        }
        let max_exotics = self.max_exotics.min(ArmorSlot::COUNT as i32) as u8;

        Ok(ValidatedObjectives {
            weights: StatWeights::new(weights),
            max_exotics,
            assume_masterwork: self.assume_masterwork,
        })
    }
}

impl Default for Objectives {
    /// Every stat weighted equally, one exotic allowed.
    fn default() -> Self {
        Self::new([1; STAT_COUNT])
    }
}

/// Objectives that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedObjectives {
    pub weights: StatWeights,
    pub max_exotics: u8,
    pub assume_masterwork: bool,
}
