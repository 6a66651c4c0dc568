//! Greedy per-unit enemy planning.
//!
//! One decision per unit per turn: attack the closest living opponent when
//! adjacent, otherwise take a single step toward it, closing the horizontal
//! gap before the vertical one. No pathing, no obstacle avoidance: a blocked
//! step means the unit holds still this turn.

use crate::command::{Command, MELEE_RANGE};
use crate::config::BattleConfig;
use crate::state::{BattleState, Position, UnitId, UnitState};

/// Stateless greedy planner producing at most one command per planning pass.
pub struct AiPlanner;

impl AiPlanner {
    /// Decides the unit's command for this turn, if any. Pure: the engine is
    /// responsible for clearing the stale queue and enqueueing the result.
    pub fn plan(state: &BattleState, id: UnitId, config: &BattleConfig) -> Option<Command> {
        let unit = state.unit(id)?;
        if !unit.is_alive() {
            return None;
        }

        let target = Self::closest_living_opponent(state, unit)?;

        if unit.position.manhattan_distance(target.position) <= MELEE_RANGE {
            return Some(Command::attack(
                id,
                target.id,
                config.attack_damage,
                config.attack_cost,
            ));
        }

        let step = Self::step_towards(unit.position, target.position);
        if state.grid.contains(step) && !state.grid.is_occupied(step) {
            Some(Command::move_to(id, unit.position, step, config.move_cost))
        } else {
            None
        }
    }

    /// Closest living opposing unit by Euclidean distance; the first minimal
    /// candidate in roster order wins ties.
    fn closest_living_opponent<'a>(
        state: &'a BattleState,
        unit: &UnitState,
    ) -> Option<&'a UnitState> {
        let mut closest: Option<(&UnitState, u64)> = None;
        for candidate in state.units.living(unit.team.opponent()) {
            let distance = unit.position.distance_squared(candidate.position);
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((candidate, distance));
            }
        }
        closest.map(|(candidate, _)| candidate)
    }

    /// Single greedy step: reduce the x gap first, the z gap only once the
    /// columns align.
    fn step_towards(from: Position, to: Position) -> Position {
        let mut x = from.x;
        let mut z = from.z;

        if to.x > x {
            x += 1;
        } else if to.x < x {
            x -= 1;
        } else if to.z > z {
            z += 1;
        } else if to.z < z {
            z -= 1;
        }

        Position::new(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandKind;
    use crate::state::{Grid, RosterState, Team, UnitState};

    fn state(units: Vec<(u32, Team, Position)>) -> BattleState {
        let roster = RosterState::new(
            units
                .iter()
                .map(|&(id, team, _)| UnitState::new(UnitId(id), team, 100, 3))
                .collect(),
        );
        let mut state = BattleState::new(Grid::new(5, 5), roster);
        for (id, _, position) in units {
            state.place_unit(UnitId(id), position);
        }
        state
    }

    #[test]
    fn greedy_step_reduces_x_before_z() {
        let state = state(vec![
            (0, Team::Player, Position::new(0, 0)),
            (1, Team::Enemy, Position::new(4, 4)),
        ]);
        let command = AiPlanner::plan(&state, UnitId(1), &BattleConfig::default()).unwrap();
        match command.kind() {
            CommandKind::Move(step) => assert_eq!(step.destination(), Position::new(3, 4)),
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn adjacent_target_yields_attack() {
        let state = state(vec![
            (0, Team::Player, Position::new(1, 0)),
            (1, Team::Enemy, Position::new(1, 1)),
        ]);
        let command = AiPlanner::plan(&state, UnitId(1), &BattleConfig::default()).unwrap();
        match command.kind() {
            CommandKind::Attack(attack) => assert_eq!(attack.target(), UnitId(0)),
            other => panic!("expected attack, got {other:?}"),
        }
    }

    #[test]
    fn dead_units_are_not_targeted() {
        let mut state = state(vec![
            (0, Team::Player, Position::new(1, 1)),
            (1, Team::Player, Position::new(0, 4)),
            (2, Team::Enemy, Position::new(2, 1)),
        ]);
        state.unit_mut(UnitId(0)).unwrap().take_damage(100);
        state.grid.clear_occupant(Position::new(1, 1));

        let command = AiPlanner::plan(&state, UnitId(2), &BattleConfig::default()).unwrap();
        match command.kind() {
            // Closest living player is at (0, 4); x gap closes first.
            CommandKind::Move(step) => assert_eq!(step.destination(), Position::new(1, 1)),
            other => panic!("expected move, got {other:?}"),
        }
    }

    #[test]
    fn no_living_target_means_no_command() {
        let mut state = state(vec![
            (0, Team::Player, Position::new(0, 0)),
            (1, Team::Enemy, Position::new(4, 4)),
        ]);
        state.unit_mut(UnitId(0)).unwrap().take_damage(100);
        state.grid.clear_occupant(Position::new(0, 0));
        assert!(AiPlanner::plan(&state, UnitId(1), &BattleConfig::default()).is_none());
    }

    #[test]
    fn blocked_step_means_no_command() {
        let state = state(vec![
            (0, Team::Player, Position::new(0, 0)),
            (1, Team::Enemy, Position::new(2, 0)),
            (2, Team::Enemy, Position::new(1, 0)),
        ]);
        // Unit 1 wants to step to (1, 0), which unit 2 occupies.
        assert!(AiPlanner::plan(&state, UnitId(1), &BattleConfig::default()).is_none());
    }

    #[test]
    fn first_minimal_candidate_wins_distance_ties() {
        let state = state(vec![
            (0, Team::Player, Position::new(0, 2)),
            (1, Team::Player, Position::new(4, 2)),
            (2, Team::Enemy, Position::new(2, 2)),
        ]);
        let command = AiPlanner::plan(&state, UnitId(2), &BattleConfig::default()).unwrap();
        match command.kind() {
            // Equidistant targets: roster order favors unit 0, so step left.
            CommandKind::Move(step) => assert_eq!(step.destination(), Position::new(1, 2)),
            other => panic!("expected move, got {other:?}"),
        }
    }
}
