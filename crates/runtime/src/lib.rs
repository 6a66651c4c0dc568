//! Runtime orchestration for the battle simulation core.
//!
//! This crate wires the pure [`battle_core`] engine into a hosted
//! application: scenario setup with random placement, pacing between
//! execution steps, structured logging, and a topic-based event bus the
//! presentation layer subscribes to. Consumers build a [`Scenario`], drive
//! turns through [`BattleSession`], and render from its snapshots and
//! events.
//!
//! Modules are organized by responsibility:
//! - [`scenario`] builds the battlefield and places both teams
//! - [`session`] exposes the command-entry and turn-cycle surface
//! - [`events`] provides topic-based event routing
//! - [`pacing`] injects the delays between execution steps
pub mod error;
pub mod events;
pub mod pacing;
pub mod scenario;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{Event, EventBus, ExecutionEvent, QueueEvent, Topic, TurnEvent};
pub use pacing::{FixedPacer, NoPacing, Pacer};
pub use scenario::Scenario;
pub use session::BattleSession;
