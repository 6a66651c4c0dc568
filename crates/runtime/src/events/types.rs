//! Event types for different topics.

use battle_core::{Team, UnitId};
use serde::{Deserialize, Serialize};

/// Events related to command queue changes on a unit.
///
/// Mirrors the core's queue notifications so queue UI can redraw the
/// affected unit's card row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QueueEvent {
    /// A command was accepted into the unit's queue.
    CommandQueued { unit: UnitId },

    /// A command was removed, or the queue was cleared.
    CommandRemoved { unit: UnitId },
}

/// Turn management event: the turn flipped to `side`.
///
/// Consumers typically clear selection and card-hand state on this signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnEvent {
    pub side: Team,
}

/// Events related to command resolution during an execution pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExecutionEvent {
    /// A queued command resolved successfully.
    CommandExecuted { unit: UnitId, command: String },

    /// A queued command failed validation; its action points are forfeit and
    /// the pass continues.
    CommandFailed {
        unit: UnitId,
        command: String,
        error: String,
    },
}
