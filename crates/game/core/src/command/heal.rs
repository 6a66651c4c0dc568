use std::convert::Infallible;

use crate::state::{BattleState, UnitId};

use super::CommandTransition;

/// Self-targeted heal. Always succeeds; the restored amount is clamped to
/// the owner's maximum health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealCommand {
    amount: u32,
}

impl HealCommand {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl CommandTransition for HealCommand {
    type Error = Infallible;

    fn apply(&self, owner: UnitId, state: &mut BattleState) -> Result<(), Self::Error> {
        // An unknown owner is a benign no-op rather than a failure.
        if let Some(unit) = state.unit_mut(owner) {
            unit.heal(self.amount);
        }
        Ok(())
    }

    fn revert(&self, owner: UnitId, state: &mut BattleState) {
        if let Some(unit) = state.unit_mut(owner) {
            unit.take_damage(self.amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::state::{Grid, Position, RosterState, Team, UnitState};

    #[test]
    fn heal_clamps_to_max_and_undo_compensates() {
        let roster = RosterState::new(vec![UnitState::new(UnitId(0), Team::Player, 50, 3)]);
        let mut state = BattleState::new(Grid::new(5, 5), roster);
        state.place_unit(UnitId(0), Position::ORIGIN);
        state.unit_mut(UnitId(0)).unwrap().take_damage(5);

        let command = Command::heal(UnitId(0), 20, 1);
        assert!(command.execute(&mut state).is_ok());
        assert_eq!(state.unit(UnitId(0)).unwrap().health.current, 50);

        command.undo(&mut state);
        assert_eq!(state.unit(UnitId(0)).unwrap().health.current, 30);
    }
}
