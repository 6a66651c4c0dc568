//! Command domain - queued, reversible units of gameplay action.
//!
//! A [`Command`] is an immutable value constructed up front (the card UI or
//! the AI planner supplies the parameters) and validated only when it
//! executes. Variants share the [`CommandTransition`] contract: `apply`
//! mutates the battle state or reports a validation failure, `revert` is a
//! best-effort compensating action. The turn loop never calls `revert`; it
//! exists for embedders that preview or roll back actions.
//!
//! Failures stay local: the engine logs a failed command and moves on to the
//! next one, forfeiting the action points it cost.

mod attack;
mod heal;
mod movement;

pub use attack::{AttackCommand, AttackError, MELEE_RANGE};
pub use heal::HealCommand;
pub use movement::{MoveCommand, MoveError};

use crate::state::{BattleState, Position, UnitId};

/// Defines how a concrete command variant mutates battle state.
pub trait CommandTransition {
    type Error;

    /// Validates and applies the command on behalf of `owner`.
    fn apply(&self, owner: UnitId, state: &mut BattleState) -> Result<(), Self::Error>;

    /// Reverses the forward effect. Best-effort: does not re-validate, and
    /// silently does nothing when the state no longer supports reversal.
    fn revert(&self, owner: UnitId, state: &mut BattleState);
}

/// Tagged variant over the supported command kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    Move(MoveCommand),
    Attack(AttackCommand),
    Heal(HealCommand),
}

/// A queued action: issuing unit, fixed action-point cost, and the variant
/// payload. Immutable once constructed; consumed exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    owner: UnitId,
    cost: u32,
    kind: CommandKind,
}

/// Validation failure surfaced by command execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Attack(#[from] AttackError),
}

impl Command {
    /// Single-tile move. `origin` is the owner's position at construction
    /// time; undo restores it.
    pub fn move_to(owner: UnitId, origin: Position, destination: Position, cost: u32) -> Self {
        Self {
            owner,
            cost,
            kind: CommandKind::Move(MoveCommand::new(origin, destination)),
        }
    }

    /// Melee attack against `target`.
    pub fn attack(owner: UnitId, target: UnitId, damage: u32, cost: u32) -> Self {
        Self {
            owner,
            cost,
            kind: CommandKind::Attack(AttackCommand::new(target, damage)),
        }
    }

    /// Self-targeted heal.
    pub fn heal(owner: UnitId, amount: u32, cost: u32) -> Self {
        Self {
            owner,
            cost,
            kind: CommandKind::Heal(HealCommand::new(amount)),
        }
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    /// Display name for logs and queue UI.
    pub fn name(&self) -> &'static str {
        match self.kind {
            CommandKind::Move(_) => "move",
            CommandKind::Attack(_) => "attack",
            CommandKind::Heal(_) => "heal",
        }
    }

    /// Applies side effects; `Ok` means the command succeeded. A failed
    /// command leaves the state untouched.
    pub fn execute(&self, state: &mut BattleState) -> Result<(), CommandError> {
        match &self.kind {
            CommandKind::Move(command) => command
                .apply(self.owner, state)
                .map_err(CommandError::Move),
            CommandKind::Attack(command) => command
                .apply(self.owner, state)
                .map_err(CommandError::Attack),
            CommandKind::Heal(command) => match command.apply(self.owner, state) {
                Ok(()) => Ok(()),
                Err(infallible) => match infallible {},
            },
        }
    }

    /// Best-effort compensating action reversing the forward effect.
    pub fn undo(&self, state: &mut BattleState) {
        match &self.kind {
            CommandKind::Move(command) => command.revert(self.owner, state),
            CommandKind::Attack(command) => command.revert(self.owner, state),
            CommandKind::Heal(command) => command.revert(self.owner, state),
        }
    }
}
