//! Battlefield occupancy map.
//!
//! The grid is created once at battle start and never resized. Tiles hold at
//! most one occupant; occupancy changes only through move execution, unit
//! placement, and death. Highlight tags are presentation metadata: the core
//! computes the classification, rendering belongs to the embedder.

use crate::config::BattleConfig;
use crate::rng::{RngOracle, compute_seed};

use super::types::{Position, UnitId};

/// Placement half of the battlefield, split along the column axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Presentation tag computed by the highlight classification pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    #[default]
    None,
    /// Tile is unoccupied and a legal move destination.
    Movable,
    /// Tile holds an opposing-team unit that could be attacked.
    Attackable,
}

/// One grid cell: coordinates, optional occupant, highlight tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Position,
    occupant: Option<UnitId>,
    highlight: Highlight,
}

impl Tile {
    fn new(position: Position) -> Self {
        Self {
            position,
            occupant: None,
            highlight: Highlight::None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn occupant(&self) -> Option<UnitId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }
}

/// Fixed-size 2D occupancy map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an empty grid of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for z in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(Position::new(x as i32, z as i32)));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bounds check only.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.z >= 0
            && position.x < self.width as i32
            && position.z < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some((position.z as u32 * self.width + position.x as u32) as usize)
        } else {
            None
        }
    }

    /// Returns the tile at `position`, or `None` if out of bounds.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(move |i| &mut self.tiles[i])
    }

    /// Iterates every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn occupant(&self, position: Position) -> Option<UnitId> {
        self.tile(position).and_then(Tile::occupant)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Assigns `unit` as the occupant of `position`. Returns false if the
    /// position is out of bounds.
    pub fn set_occupant(&mut self, position: Position, unit: UnitId) -> bool {
        match self.tile_mut(position) {
            Some(tile) => {
                tile.occupant = Some(unit);
                true
            }
            None => false,
        }
    }

    /// Clears the occupant of `position`. Out of bounds is a no-op.
    pub fn clear_occupant(&mut self, position: Position) {
        if let Some(tile) = self.tile_mut(position) {
            tile.occupant = None;
        }
    }

    pub(crate) fn set_highlight(&mut self, position: Position, highlight: Highlight) {
        if let Some(tile) = self.tile_mut(position) {
            tile.highlight = highlight;
        }
    }

    /// Clears every highlight tag.
    pub fn reset_highlights(&mut self) {
        for tile in &mut self.tiles {
            tile.highlight = Highlight::None;
        }
    }

    /// Samples a placement position on the requested half of the board.
    ///
    /// The column is sampled once; the row is re-sampled up to
    /// [`BattleConfig::PLACEMENT_RETRY_LIMIT`] times while the tile is
    /// occupied. If every attempt lands on an occupied tile the last sampled
    /// position is returned anyway.
    pub fn random_side_position(&self, side: Side, rng: &dyn RngOracle, seed: u64) -> Position {
        let span = (self.width / 2).max(1);
        let (x_min, x_max) = match side {
            Side::Left => (0, span - 1),
            Side::Right => (self.width - span, self.width - 1),
        };

        let x = rng.range(compute_seed(seed, 0, 0, 0), x_min, x_max) as i32;
        let mut z = rng.range(compute_seed(seed, 0, 0, 1), 0, self.height - 1) as i32;

        let mut attempts = 0;
        while self.is_occupied(Position::new(x, z))
            && attempts < BattleConfig::PLACEMENT_RETRY_LIMIT
        {
            attempts += 1;
            z = rng.range(compute_seed(seed, 0, 0, 1 + attempts as u32), 0, self.height - 1)
                as i32;
        }

        Position::new(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn tile_lookup_is_none_out_of_bounds() {
        let grid = Grid::new(5, 5);
        assert!(grid.tile(Position::new(0, 0)).is_some());
        assert!(grid.tile(Position::new(4, 4)).is_some());
        assert!(grid.tile(Position::new(5, 0)).is_none());
        assert!(grid.tile(Position::new(0, -1)).is_none());
    }

    #[test]
    fn occupancy_set_and_clear() {
        let mut grid = Grid::new(5, 5);
        let pos = Position::new(2, 3);
        assert!(grid.set_occupant(pos, UnitId(7)));
        assert_eq!(grid.occupant(pos), Some(UnitId(7)));
        grid.clear_occupant(pos);
        assert!(!grid.is_occupied(pos));
        // Out of bounds writes are rejected silently.
        assert!(!grid.set_occupant(Position::new(9, 9), UnitId(7)));
    }

    #[test]
    fn side_positions_land_in_their_half() {
        let grid = Grid::new(5, 5);
        for seed in 0..200 {
            let left = grid.random_side_position(Side::Left, &PcgRng, seed);
            assert!((0..2).contains(&left.x), "left column {}", left.x);
            let right = grid.random_side_position(Side::Right, &PcgRng, seed);
            assert!((3..5).contains(&right.x), "right column {}", right.x);
        }
    }

    #[test]
    fn placement_falls_back_when_side_is_full() {
        let mut grid = Grid::new(5, 5);
        for x in 0..2 {
            for z in 0..5 {
                grid.set_occupant(Position::new(x, z), UnitId((x * 5 + z) as u32));
            }
        }
        // Bounded retry: still returns a (necessarily occupied) left position.
        let pos = grid.random_side_position(Side::Left, &PcgRng, 99);
        assert!((0..2).contains(&pos.x));
        assert!(grid.is_occupied(pos));
    }
}
