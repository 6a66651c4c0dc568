use crate::state::{BattleState, UnitId};

use super::CommandTransition;

/// Melee range in Manhattan distance. Attacks only connect against an
/// orthogonally adjacent target.
pub const MELEE_RANGE: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("attacker {0} not found in roster")]
    AttackerMissing(UnitId),

    #[error("target {0} not found in roster")]
    TargetMissing(UnitId),

    #[error("target {0} is already dead")]
    TargetDead(UnitId),

    #[error("target at distance {distance} exceeds melee range {range}")]
    OutOfRange { distance: u32, range: u32 },
}

/// Fixed-damage melee strike against a single target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCommand {
    target: UnitId,
    damage: u32,
}

impl AttackCommand {
    pub fn new(target: UnitId, damage: u32) -> Self {
        Self { target, damage }
    }

    pub fn target(&self) -> UnitId {
        self.target
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }
}

impl CommandTransition for AttackCommand {
    type Error = AttackError;

    fn apply(&self, owner: UnitId, state: &mut BattleState) -> Result<(), Self::Error> {
        let attacker = state
            .unit(owner)
            .ok_or(AttackError::AttackerMissing(owner))?;
        let target = state
            .unit(self.target)
            .ok_or(AttackError::TargetMissing(self.target))?;

        if !target.is_alive() {
            return Err(AttackError::TargetDead(self.target));
        }

        let distance = attacker.position.manhattan_distance(target.position);
        if distance > MELEE_RANGE {
            return Err(AttackError::OutOfRange {
                distance,
                range: MELEE_RANGE,
            });
        }

        let target_position = target.position;
        let died = {
            let target = state
                .unit_mut(self.target)
                .ok_or(AttackError::TargetMissing(self.target))?;
            target.take_damage(self.damage);
            !target.is_alive()
        };

        // A unit that dies leaves the board; its tile becomes free.
        if died {
            state.grid.clear_occupant(target_position);
        }
        Ok(())
    }

    fn revert(&self, _owner: UnitId, state: &mut BattleState) {
        // Compensating heal only applies to a still-living target. Death is
        // not reversible: a lethal attack cannot be undone into a revival.
        if let Some(target) = state.unit_mut(self.target)
            && target.is_alive()
        {
            target.heal(self.damage);
        }
    }
}
