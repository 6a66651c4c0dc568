//! Battle setup: grid construction and initial unit placement.
//!
//! Player units spawn on the left half of the board, enemies on the right,
//! each at a best-effort random unoccupied tile. Placement is deterministic
//! per seed; `Scenario::skirmish` draws a fresh seed so replayed battles can
//! pin it with [`Scenario::with_seed`].

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleState, Grid, PcgRng, RosterState, Side, Team, TurnEngine, UnitId,
    compute_seed,
};
use battle_content::{RosterLoader, UnitSpec};

use crate::error::{Result, RuntimeError};
use crate::pacing::Pacer;
use crate::session::BattleSession;

pub struct Scenario {
    config: BattleConfig,
    specs: Vec<UnitSpec>,
    seed: u64,
}

impl Scenario {
    /// Scenario from explicit config and roster specs, with a random seed.
    pub fn new(config: BattleConfig, specs: Vec<UnitSpec>) -> Self {
        Self {
            config,
            specs,
            seed: rand::random(),
        }
    }

    /// Default two-a-side skirmish from the embedded roster.
    pub fn skirmish() -> Result<Self> {
        let specs = RosterLoader::load().map_err(|e| RuntimeError::Content {
            reason: e.to_string(),
        })?;
        Ok(Self::new(BattleConfig::default(), specs))
    }

    /// Pins the placement seed for reproducible setup.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the engine and wraps it in a session.
    pub fn build(self, pacer: Arc<dyn Pacer>) -> BattleSession {
        let (engine, names) = self.build_engine();
        BattleSession::new(engine, names, pacer)
    }

    /// Builds the bare engine plus the id-to-display-name map.
    pub fn build_engine(self) -> (TurnEngine, HashMap<UnitId, String>) {
        let grid = Grid::new(self.config.grid_width, self.config.grid_height);

        let mut names = HashMap::new();
        let units = self
            .specs
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let id = UnitId(index as u32);
                names.insert(id, spec.name.clone());
                spec.clone().into_unit(id)
            })
            .collect();

        let mut state = BattleState::new(grid, RosterState::new(units));
        for (index, spec) in self.specs.iter().enumerate() {
            let id = UnitId(index as u32);
            let side = match spec.team {
                Team::Player => Side::Left,
                Team::Enemy => Side::Right,
            };
            let position = state.grid.random_side_position(
                side,
                &PcgRng,
                compute_seed(self.seed, index as u64, id.0, 0),
            );
            state.place_unit(id, position);
            tracing::debug!(unit = %id, name = %spec.name, %position, "unit placed");
        }

        (TurnEngine::new(state, self.config), names)
    }
}
