//! Unit state and roster bookkeeping.

use crate::command::Command;

use super::types::{Position, ResourceMeter, Team, UnitId};

/// One combatant: identity, side, health, action-point budget, and the FIFO
/// queue of commands waiting for the next execution pass.
///
/// # Invariants
///
/// - Health never goes below zero; a unit at zero health is dead and excluded
///   from planning, execution, and targeting.
/// - The summed action-point cost of queued commands never exceeds
///   `max_action_points`; enforced at enqueue time, not at execution time.
/// - A living unit's `position` names the unique tile whose occupant is this
///   unit's id (kept in sync by placement and move execution).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,
    pub team: Team,
    pub position: Position,
    pub health: ResourceMeter,
    pub max_action_points: u32,
    commands: Vec<Command>,
}

impl UnitState {
    pub fn new(id: UnitId, team: Team, max_health: u32, max_action_points: u32) -> Self {
        Self {
            id,
            team,
            position: Position::ORIGIN,
            health: ResourceMeter::at_max(max_health),
            max_action_points,
            commands: Vec::new(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Unconditionally sets coordinates. Occupancy bookkeeping is the
    /// caller's responsibility (commands do it before calling this).
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Applies damage, clamped at zero health.
    pub fn take_damage(&mut self, amount: u32) {
        self.health.deplete(amount);
    }

    /// Restores health, clamped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health.restore(amount);
    }

    /// Summed action-point cost of the queued commands.
    pub fn queued_cost(&self) -> u32 {
        self.commands.iter().map(Command::cost).sum()
    }

    pub fn remaining_action_points(&self) -> u32 {
        self.max_action_points - self.queued_cost()
    }

    /// True iff the queue has budget left for `command`.
    pub fn can_add_command(&self, command: &Command) -> bool {
        self.queued_cost() + command.cost() <= self.max_action_points
    }

    /// Enqueues iff the budget allows it. Returns whether the command was
    /// accepted; a rejection is silent beyond the boolean.
    pub fn add_command(&mut self, command: Command) -> bool {
        if self.can_add_command(&command) {
            self.commands.push(command);
            true
        } else {
            false
        }
    }

    /// Removes the command at `index`. Out of bounds is a no-op; returns
    /// whether anything was removed.
    pub fn remove_command(&mut self, index: usize) -> bool {
        if index < self.commands.len() {
            self.commands.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Ordered snapshot of the queue.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn has_queued_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Pops the next command in FIFO order for execution.
    pub(crate) fn pop_next_command(&mut self) -> Option<Command> {
        if self.commands.is_empty() {
            None
        } else {
            Some(self.commands.remove(0))
        }
    }
}

/// All units in the battle, in roster order.
///
/// Roster order is execution and tie-break order; units are never removed,
/// dead ones are skipped wherever liveness matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterState {
    units: Vec<UnitState>,
}

impl RosterState {
    pub fn new(units: Vec<UnitState>) -> Self {
        Self { units }
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UnitState> {
        self.units.iter()
    }

    /// Units on `team` in roster order, dead ones included.
    pub fn team(&self, team: Team) -> impl Iterator<Item = &UnitState> {
        self.units.iter().filter(move |unit| unit.team == team)
    }

    /// Living units on `team` in roster order.
    pub fn living(&self, team: Team) -> impl Iterator<Item = &UnitState> {
        self.team(team).filter(|unit| unit.is_alive())
    }

    /// Ids of the living units on `team`, in roster order.
    pub fn living_ids(&self, team: Team) -> Vec<UnitId> {
        self.living(team).map(|unit| unit.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn unit() -> UnitState {
        UnitState::new(UnitId(0), Team::Player, 100, 3)
    }

    #[test]
    fn budget_enforced_at_enqueue_time() {
        let mut unit = unit();
        assert!(unit.add_command(Command::heal(UnitId(0), 10, 2)));
        assert!(unit.add_command(Command::heal(UnitId(0), 10, 1)));
        assert_eq!(unit.remaining_action_points(), 0);

        let third = Command::heal(UnitId(0), 10, 1);
        assert!(!unit.can_add_command(&third));
        assert!(!unit.add_command(third));
        assert_eq!(unit.commands().len(), 2);
    }

    #[test]
    fn remove_command_out_of_bounds_is_noop() {
        let mut unit = unit();
        unit.add_command(Command::heal(UnitId(0), 10, 1));
        assert!(!unit.remove_command(5));
        assert_eq!(unit.commands().len(), 1);
        assert!(unit.remove_command(0));
        assert!(!unit.has_queued_commands());
    }

    #[test]
    fn damage_clamps_at_zero_and_heal_at_max() {
        let mut unit = unit();
        unit.take_damage(250);
        assert_eq!(unit.health.current, 0);
        assert!(!unit.is_alive());
        unit.heal(500);
        assert_eq!(unit.health.current, 100);
    }
}
