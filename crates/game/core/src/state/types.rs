use std::fmt;

/// Unique identifier for a unit tracked in the roster.
///
/// Units are never removed from the roster; a unit that dies keeps its id and
/// is flagged dead via its health meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Controlling side of a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    Player,
    Enemy,
}

impl Team {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Team::Player => Team::Enemy,
            Team::Enemy => Team::Player,
        }
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, z: 0 };

    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Axis-aligned (Manhattan) distance, used for melee range checks.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.z.abs_diff(other.z)
    }

    /// Squared Euclidean distance. Preserves Euclidean ordering without
    /// floating point, so target selection stays deterministic.
    pub fn distance_squared(self, other: Self) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dz = self.z.abs_diff(other.z) as u64;
        dx * dx + dz * dz
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Integer resource meter (health) tracked per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Creates a meter filled to its maximum.
    pub fn at_max(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Reduces the meter, saturating at zero.
    pub fn deplete(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Restores the meter, clamped to its maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.maximum.min(self.current.saturating_add(amount));
    }

    pub fn is_empty(self) -> bool {
        self.current == 0
    }
}
