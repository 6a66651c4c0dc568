//! Topic-based event routing for presentation consumers.
//!
//! The core engine accumulates [`battle_core::BattleEvent`]s in its outbox;
//! the session pumps them onto this bus and adds execution reports, so UI
//! code can subscribe to exactly the topics it renders.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{ExecutionEvent, QueueEvent, TurnEvent};
