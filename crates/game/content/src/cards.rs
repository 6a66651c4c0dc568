//! Card definitions: the data the command-queueing UI deals from.
//!
//! A card is pure configuration - a display name, the command kind it maps
//! to, its action-point cost, and a magnitude (damage or heal amount, unused
//! for moves). The core treats all of these as opaque values supplied at
//! command construction time.

use battle_core::{Command, Position, UnitId};

/// Kind of command a card produces when played.
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
pub enum CardKind {
    Move,
    Attack,
    Heal,
    /// Defined in card data but not yet backed by a command variant.
    Buff,
}

/// One card as loaded from data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDefinition {
    pub name: String,
    pub kind: CardKind,
    pub action_point_cost: u32,
    /// Damage for attack cards, restored health for heal cards.
    pub value: u32,
}

/// Target the player picked when playing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardTarget {
    /// Destination tile for a move; `origin` is the unit's position when the
    /// card was played.
    Tile {
        origin: Position,
        destination: Position,
    },
    /// Opposing unit for an attack.
    Unit(UnitId),
    /// Self-targeted cards take no explicit target.
    None,
}

impl CardDefinition {
    /// Materializes the card into a core command for `owner`.
    ///
    /// Fails when the card kind has no command variant (Buff) or the target
    /// shape does not match the kind.
    #[cfg(feature = "loaders")]
    pub fn instantiate(&self, owner: UnitId, target: CardTarget) -> anyhow::Result<Command> {
        match (self.kind, target) {
            (
                CardKind::Move,
                CardTarget::Tile {
                    origin,
                    destination,
                },
            ) => Ok(Command::move_to(
                owner,
                origin,
                destination,
                self.action_point_cost,
            )),
            (CardKind::Attack, CardTarget::Unit(unit)) => {
                Ok(Command::attack(owner, unit, self.value, self.action_point_cost))
            }
            (CardKind::Heal, CardTarget::None) => {
                Ok(Command::heal(owner, self.value, self.action_point_cost))
            }
            (CardKind::Buff, _) => Err(anyhow::anyhow!(
                "card '{}' has kind buff, which has no command variant",
                self.name
            )),
            (kind, target) => Err(anyhow::anyhow!(
                "card '{}' ({kind}) cannot be played on target {target:?}",
                self.name
            )),
        }
    }
}
