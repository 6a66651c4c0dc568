use crate::state::{BattleState, Position, UnitId};

use super::CommandTransition;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("owner {0} not found in roster")]
    OwnerMissing(UnitId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is occupied")]
    Occupied { destination: Position },
}

/// Single-tile relocation to an unoccupied destination.
///
/// `origin` is captured when the command is constructed, so undo restores the
/// pre-move coordinates even if the command object outlives the pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCommand {
    origin: Position,
    destination: Position,
}

impl MoveCommand {
    pub fn new(origin: Position, destination: Position) -> Self {
        Self {
            origin,
            destination,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn destination(&self) -> Position {
        self.destination
    }
}

impl CommandTransition for MoveCommand {
    type Error = MoveError;

    fn apply(&self, owner: UnitId, state: &mut BattleState) -> Result<(), Self::Error> {
        if !state.grid.contains(self.destination) {
            return Err(MoveError::OutOfBounds {
                destination: self.destination,
            });
        }
        if state.grid.is_occupied(self.destination) {
            return Err(MoveError::Occupied {
                destination: self.destination,
            });
        }

        let current = state
            .unit(owner)
            .ok_or(MoveError::OwnerMissing(owner))?
            .position;

        state.grid.clear_occupant(current);
        state.grid.set_occupant(self.destination, owner);
        if let Some(unit) = state.unit_mut(owner) {
            unit.move_to(self.destination);
        }
        Ok(())
    }

    fn revert(&self, owner: UnitId, state: &mut BattleState) {
        // Unconditional: no re-validation, mirrors the forward swap exactly.
        state.grid.clear_occupant(self.destination);
        state.grid.set_occupant(self.origin, owner);
        if let Some(unit) = state.unit_mut(owner) {
            unit.move_to(self.origin);
        }
    }
}
