use battle_core::UnitId;

/// Errors surfaced by the runtime surface.
///
/// Simulation-level failures (a move into an occupied tile, an out-of-range
/// attack) are not errors here: they are logged, published as execution
/// events, and the pass continues. This type covers misuse of the session
/// surface and content loading problems.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("commands can only be entered during the player's idle turn")]
    NotPlayersTurn,

    #[error("an execution pass is already in progress")]
    ExecutionInProgress,

    #[error("unknown unit {0}")]
    UnknownUnit(UnitId),

    #[error("failed to load content: {reason}")]
    Content { reason: String },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
