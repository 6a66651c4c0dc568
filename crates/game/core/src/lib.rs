//! Deterministic turn-based combat logic, independent of any game engine.
//!
//! `battle-core` defines the canonical rules (grid, units, commands, turn
//! cycle, enemy planning) and exposes pure APIs reused by the runtime and by
//! offline tools. All state mutation flows through [`engine::TurnEngine`];
//! rendering, animation, card UI, and input are external collaborators that
//! call in through the engine and consume the events it emits.
pub mod ai;
pub mod command;
pub mod config;
pub mod engine;
pub mod event;
pub mod rng;
pub mod state;

pub use ai::AiPlanner;
pub use command::{
    AttackCommand, AttackError, Command, CommandError, CommandKind, CommandTransition,
    HealCommand, MELEE_RANGE, MoveCommand, MoveError,
};
pub use config::BattleConfig;
pub use engine::{CommandReport, StepOutcome, TurnEngine};
pub use event::BattleEvent;
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use state::{
    BattleState, Grid, Highlight, Position, ResourceMeter, RosterState, Side, Team, Tile,
    TurnState, UnitId, UnitState,
};
