//! Outbound notifications for the presentation layer.
//!
//! The core never talks to a UI directly. Engine mutations append events to
//! an outbox which the embedder drains each tick and forwards however it
//! likes (the runtime crate republishes them on a broadcast bus).

use crate::state::{Team, UnitId};

/// Notification emitted by the engine for presentation-layer consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A command was accepted into a unit's queue.
    CommandQueued { unit: UnitId },

    /// A command was removed from a unit's queue, or the queue was cleared.
    /// Clearing fires this even when the queue was already empty.
    CommandRemoved { unit: UnitId },

    /// The turn flipped; `side` is the side now acting.
    TurnChanged { side: Team },
}
