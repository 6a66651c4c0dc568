//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe the battlefield, the
//! unit roster, and turn bookkeeping. The runtime layer queries this state
//! but mutates it exclusively through [`crate::engine::TurnEngine`].
mod turn;
mod types;
mod unit;
mod world;

pub use turn::TurnState;
pub use types::{Position, ResourceMeter, Team, UnitId};
pub use unit::{RosterState, UnitState};
pub use world::{Grid, Highlight, Side, Tile};

/// Canonical snapshot of the battle: grid, roster, and turn bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Battlefield occupancy map.
    pub grid: Grid,
    /// All units, in roster order.
    pub units: RosterState,
    /// Whose turn it is, and whether a pass is executing.
    pub turn: TurnState,
}

impl BattleState {
    pub fn new(grid: Grid, units: RosterState) -> Self {
        Self {
            grid,
            units,
            turn: TurnState::new(),
        }
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.unit(id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.unit_mut(id)
    }

    /// One-time placement at battle setup. Bypasses move validation: sets the
    /// unit's coordinates and claims the tile directly. Returns false if the
    /// unit is unknown or the position out of bounds.
    pub fn place_unit(&mut self, id: UnitId, position: Position) -> bool {
        if !self.grid.contains(position) {
            return false;
        }
        match self.units.unit_mut(id) {
            Some(unit) => {
                unit.move_to(position);
                self.grid.set_occupant(position, id);
                true
            }
            None => false,
        }
    }

    /// Classification pass over every tile, relative to `unit`'s team:
    /// unoccupied tiles are tagged movable, tiles holding an opposing-team
    /// unit are tagged attackable. Previous tags are cleared first.
    pub fn highlight_valid_moves(&mut self, id: UnitId) {
        self.grid.reset_highlights();
        let Some(team) = self.units.unit(id).map(|unit| unit.team) else {
            return;
        };

        let tags: Vec<(Position, Highlight)> = self
            .grid
            .tiles()
            .filter_map(|tile| match tile.occupant() {
                None => Some((tile.position(), Highlight::Movable)),
                Some(occupant) => {
                    let hostile = self
                        .units
                        .unit(occupant)
                        .is_some_and(|other| other.team != team);
                    hostile.then_some((tile.position(), Highlight::Attackable))
                }
            })
            .collect();

        for (position, highlight) in tags {
            self.grid.set_highlight(position, highlight);
        }
    }

    /// Clears all highlight tags.
    pub fn reset_highlights(&mut self) {
        self.grid.reset_highlights();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> BattleState {
        let roster = RosterState::new(vec![
            UnitState::new(UnitId(0), Team::Player, 100, 3),
            UnitState::new(UnitId(1), Team::Enemy, 100, 3),
        ]);
        BattleState::new(Grid::new(5, 5), roster)
    }

    #[test]
    fn place_unit_keeps_occupancy_consistent() {
        let mut state = state();
        assert!(state.place_unit(UnitId(0), Position::new(1, 2)));
        let unit = state.unit(UnitId(0)).unwrap();
        assert_eq!(unit.position, Position::new(1, 2));
        assert_eq!(state.grid.occupant(Position::new(1, 2)), Some(UnitId(0)));

        assert!(!state.place_unit(UnitId(0), Position::new(7, 7)));
        assert!(!state.place_unit(UnitId(9), Position::new(0, 0)));
    }

    #[test]
    fn highlight_pass_tags_vacant_and_hostile_tiles() {
        let mut state = state();
        state.place_unit(UnitId(0), Position::new(0, 0));
        state.place_unit(UnitId(1), Position::new(4, 4));

        state.highlight_valid_moves(UnitId(0));
        let grid = &state.grid;
        assert_eq!(
            grid.tile(Position::new(2, 2)).unwrap().highlight(),
            Highlight::Movable
        );
        assert_eq!(
            grid.tile(Position::new(4, 4)).unwrap().highlight(),
            Highlight::Attackable
        );
        // The inspected unit's own tile is neither.
        assert_eq!(
            grid.tile(Position::new(0, 0)).unwrap().highlight(),
            Highlight::None
        );

        state.reset_highlights();
        assert!(
            state
                .grid
                .tiles()
                .all(|tile| tile.highlight() == Highlight::None)
        );
    }
}
