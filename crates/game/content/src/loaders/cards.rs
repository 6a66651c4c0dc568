//! Card catalog loader.
//!
//! The base card set ships embedded in the crate; additional sets can be
//! loaded from RON files on disk.

use std::collections::HashMap;

use std::path::Path;

use crate::cards::CardDefinition;
use crate::loaders::{LoadResult, read_file};

/// Registry of card definitions, looked up by card name.
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: HashMap<String, CardDefinition>,
}

impl CardCatalog {
    /// Loads the embedded base card set.
    pub fn load() -> LoadResult<Self> {
        let basic_ron = include_str!("../../data/cards/basic.ron");
        let cards: Vec<CardDefinition> = ron::from_str(basic_ron)
            .map_err(|e| anyhow::anyhow!("Failed to parse basic.ron: {}", e))?;

        let mut catalog = HashMap::new();
        for card in cards {
            catalog.insert(card.name.clone(), card);
        }
        Ok(Self { cards: catalog })
    }

    /// Loads an additional card set from a RON file, overriding any embedded
    /// cards with the same name.
    pub fn load_from(&mut self, path: &Path) -> LoadResult<()> {
        let content = read_file(path)?;
        let cards: Vec<CardDefinition> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card set {}: {}", path.display(), e))?;
        for card in cards {
            self.cards.insert(card.name.clone(), card);
        }
        Ok(())
    }

    /// Gets a card definition by name.
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Returns an iterator over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn embedded_card_set_parses() {
        let catalog = CardCatalog::load().unwrap();
        assert!(!catalog.is_empty());

        let strike = catalog.get("Strike").unwrap();
        assert_eq!(strike.kind, CardKind::Attack);
        assert_eq!(strike.action_point_cost, 1);
        assert_eq!(strike.value, 10);

        assert!(catalog.iter().any(|card| card.kind == CardKind::Move));
        assert!(catalog.iter().any(|card| card.kind == CardKind::Heal));
    }
}
