//! Exotic locking: pin one specific exotic into every returned loadout.
//!
//! The optimizer has no notion of "must include"; locking is expressed as a
//! pool rewrite instead. After [`ExoticLock::apply`] the locked piece is the
//! only candidate in its slot and the only exotic left, so any legal loadout
//! over the filtered pool wears it (given an exotic budget of at least one).

use loadout_core::{ArmorPiece, PieceId};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LockError {
    #[error("locked piece {0} is not in the pool")]
    NotFound(PieceId),

    #[error("locked piece {0} is not an exotic")]
    NotExotic(PieceId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExoticLock {
    pub piece: PieceId,
}

impl ExoticLock {
    pub fn new(piece: PieceId) -> Self {
        Self { piece }
    }

    /// Filters `pool` so only loadouts wearing the locked exotic remain.
    pub fn apply(&self, pool: &[ArmorPiece]) -> Result<Vec<ArmorPiece>, LockError> {
        let locked = pool
            .iter()
            .find(|piece| piece.id == self.piece)
            .ok_or(LockError::NotFound(self.piece))?;
        if !locked.is_exotic {
            return Err(LockError::NotExotic(self.piece));
        }

        let filtered: Vec<_> = pool
            .iter()
            .filter(|piece| {
                piece.id == locked.id || (piece.slot != locked.slot && !piece.is_exotic)
            })
            .cloned()
            .collect();

        tracing::debug!(
            locked = %locked.id,
            slot = %locked.slot,
            before = pool.len(),
            after = filtered.len(),
            "applied exotic lock"
        );

        Ok(filtered)
    }
}
