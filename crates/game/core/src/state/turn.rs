use super::types::Team;

/// Turn bookkeeping: whose turn it is and whether an execution pass is
/// currently resolving commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Side currently acting.
    pub side: Team,

    /// True while queued commands are being resolved. New command entry and
    /// `end_turn` are frozen for the duration.
    pub executing: bool,
}

impl TurnState {
    /// Battles always open on the player side, idle.
    pub fn new() -> Self {
        Self {
            side: Team::Player,
            executing: false,
        }
    }

    /// True when the player may enter commands: player side and not mid-pass.
    pub fn accepts_player_input(self) -> bool {
        self.side == Team::Player && !self.executing
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
