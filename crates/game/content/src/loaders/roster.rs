//! Unit roster loader.
//!
//! A roster file lists the combatants a scenario starts with. Specs convert
//! into core unit state once the scenario assigns ids and placements.

use std::path::Path;

use battle_core::{Team, UnitId, UnitState};

use crate::loaders::{LoadResult, read_file};

/// Blueprint for one combatant, as written in roster data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub name: String,
    pub team: Team,
    pub max_health: u32,
    pub max_action_points: u32,
}

impl UnitSpec {
    /// Converts the spec into unit state under the given id. Placement
    /// happens separately at scenario setup.
    pub fn into_unit(self, id: UnitId) -> UnitState {
        UnitState::new(id, self.team, self.max_health, self.max_action_points)
    }
}

/// Loader for unit rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Loads the embedded skirmish roster (two units per side).
    pub fn load() -> LoadResult<Vec<UnitSpec>> {
        let roster_ron = include_str!("../../data/roster/skirmish.ron");
        ron::from_str(roster_ron).map_err(|e| anyhow::anyhow!("Failed to parse skirmish.ron: {}", e))
    }

    /// Loads a roster from a RON file.
    pub fn load_from(path: &Path) -> LoadResult<Vec<UnitSpec>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_roster_parses_with_both_teams() {
        let specs = RosterLoader::load().unwrap();
        assert!(specs.iter().any(|spec| spec.team == Team::Player));
        assert!(specs.iter().any(|spec| spec.team == Team::Enemy));

        let unit = specs[0].clone().into_unit(UnitId(0));
        assert!(unit.is_alive());
        assert_eq!(unit.remaining_action_points(), unit.max_action_points);
    }
}
