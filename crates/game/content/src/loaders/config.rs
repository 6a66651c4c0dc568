//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config: BattleConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_round_trips() {
        let toml_src = r#"
            grid_width = 6
            grid_height = 4
            move_cost = 1
            attack_cost = 1
            heal_cost = 2
            attack_damage = 12
            heal_amount = 8
        "#;
        let config: BattleConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.grid_width, 6);
        assert_eq!(config.heal_cost, 2);
        assert_eq!(config.attack_damage, 12);
    }
}
