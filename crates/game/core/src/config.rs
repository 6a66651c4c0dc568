/// Battle configuration constants and tunable parameters.
///
/// Command costs and magnitudes live here as defaults; data-driven card
/// definitions may override them per card at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Battlefield width in tiles.
    pub grid_width: u32,
    /// Battlefield height in tiles.
    pub grid_height: u32,

    /// Action-point cost of a single-tile move.
    pub move_cost: u32,
    /// Action-point cost of a melee attack.
    pub attack_cost: u32,
    /// Action-point cost of a self-heal.
    pub heal_cost: u32,

    /// Damage applied by an AI-planned attack.
    pub attack_damage: u32,
    /// Amount restored by a self-heal.
    pub heal_amount: u32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Attempts made to find an unoccupied placement tile before giving up
    /// and returning the last sampled position. Best-effort: initial
    /// placement assumes a sparse board.
    pub const PLACEMENT_RETRY_LIMIT: usize = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GRID_SIZE: u32 = 5;
    pub const DEFAULT_MAX_ACTION_POINTS: u32 = 3;
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 10;
    pub const DEFAULT_HEAL_AMOUNT: u32 = 10;

    pub fn new() -> Self {
        Self {
            grid_width: Self::DEFAULT_GRID_SIZE,
            grid_height: Self::DEFAULT_GRID_SIZE,
            move_cost: 1,
            attack_cost: 1,
            heal_cost: 1,
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            heal_amount: Self::DEFAULT_HEAL_AMOUNT,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
