//! In-memory catalog of generals and soldiers.

use std::collections::BTreeMap;

use skirmish_core::{Blueprint, CatalogOracle, CharacterId, FactionId};

/// Static blueprint lookup keyed by character id.
///
/// Generals are the characters a player may pick; soldiers are summoned by
/// generals of the same faction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    generals: BTreeMap<CharacterId, Blueprint>,
    soldiers: BTreeMap<CharacterId, Blueprint>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from general and soldier lists. Later entries replace
    /// earlier ones with the same character id.
    pub fn from_parts(
        generals: impl IntoIterator<Item = Blueprint>,
        soldiers: impl IntoIterator<Item = Blueprint>,
    ) -> Self {
        let mut catalog = Self::new();
        generals.into_iter().for_each(|b| catalog.insert_general(b));
        soldiers.into_iter().for_each(|b| catalog.insert_soldier(b));
        catalog
    }

    pub fn insert_general(&mut self, blueprint: Blueprint) {
        self.generals
            .insert(blueprint.character_id.clone(), blueprint);
    }

    pub fn insert_soldier(&mut self, blueprint: Blueprint) {
        self.soldiers
            .insert(blueprint.character_id.clone(), blueprint);
    }

    pub fn generals(&self) -> impl Iterator<Item = &Blueprint> {
        self.generals.values()
    }

    pub fn soldiers(&self) -> impl Iterator<Item = &Blueprint> {
        self.soldiers.values()
    }

    pub fn soldier(&self, id: &CharacterId) -> Option<&Blueprint> {
        self.soldiers.get(id)
    }

    pub fn factions(&self) -> Vec<FactionId> {
        let mut factions: Vec<FactionId> = self
            .generals
            .values()
            .chain(self.soldiers.values())
            .map(|blueprint| blueprint.faction.clone())
            .collect();
        factions.sort();
        factions.dedup();
        factions
    }
}

impl CatalogOracle for Catalog {
    fn general(&self, id: &CharacterId) -> Option<Blueprint> {
        self.generals.get(id).cloned()
    }

    fn summons(&self, faction: &FactionId) -> Vec<Blueprint> {
        self.soldiers
            .values()
            .filter(|blueprint| &blueprint.faction == faction)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blueprint(id: &str, faction: &str) -> Blueprint {
        Blueprint::builder(id, faction, id).build()
    }

    #[test]
    fn summons_are_filtered_by_faction_in_id_order() {
        let catalog = Catalog::from_parts(
            [blueprint("lord", "red")],
            [
                blueprint("pikeman", "red"),
                blueprint("ghoul", "black"),
                blueprint("archer", "red"),
            ],
        );

        let ids: Vec<_> = catalog
            .summons(&"red".into())
            .into_iter()
            .map(|b| b.character_id)
            .collect();
        assert_eq!(ids, vec![CharacterId::from("archer"), CharacterId::from("pikeman")]);
        assert!(catalog.summons(&"blue".into()).is_empty());
    }

    #[test]
    fn only_generals_can_be_picked() {
        let catalog = Catalog::from_parts([blueprint("lord", "red")], [blueprint("pikeman", "red")]);
        assert!(catalog.general(&"lord".into()).is_some());
        assert!(catalog.general(&"pikeman".into()).is_none());
        assert_eq!(catalog.factions(), vec![FactionId::from("red")]);
    }
}
