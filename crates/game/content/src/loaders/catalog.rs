//! Character catalog loader.

use std::path::Path;

use skirmish_core::Blueprint;

use crate::Catalog;
use crate::loaders::{LoadResult, read_file};

/// On-disk layout of a catalog file.
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    generals: Vec<Blueprint>,
    #[serde(default)]
    soldiers: Vec<Blueprint>,
}

/// Loader for character catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file.
    ///
    /// RON format: `(generals: [Blueprint, ...], soldiers: [Blueprint, ...])`
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        for blueprint in file.generals.iter().chain(&file.soldiers) {
            for skill in &blueprint.skills {
                if skill.min_range > skill.range {
                    anyhow::bail!(
                        "skill '{}' of '{}' has min_range {} above range {}",
                        skill.id,
                        blueprint.character_id,
                        skill.min_range,
                        skill.range
                    );
                }
            }
        }

        Ok(Catalog::from_parts(file.generals, file.soldiers))
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{CatalogOracle, SkillEffect, TargetType, TargetZone};

    use super::*;

    const SAMPLE: &str = r#"
        (
            generals: [
                (
                    character_id: "warlord",
                    faction: "orcs",
                    name: "Warlord",
                    initiative: 6,
                    max_hp: 20,
                    max_ap: 3,
                    attack: 3,
                    defense: 1,
                    summon_budget: 2,
                    skills: [
                        (
                            id: "cleave",
                            name: "Cleave",
                            cost: 2,
                            range: 1,
                            target_zone: RADIUS,
                            target_type: ENEMY,
                            effect: Damage(base_power: 2),
                        ),
                    ],
                    triggers: [(on: TurnStart, effect: Heal(amount: 1))],
                ),
            ],
            soldiers: [
                (
                    character_id: "grunt",
                    faction: "orcs",
                    name: "Grunt",
                    cost: 2,
                    initiative: 5,
                    max_hp: 8,
                    max_ap: 3,
                    attack: 2,
                    defense: 0,
                ),
            ],
        )
    "#;

    #[test]
    fn parses_generals_soldiers_and_skills() {
        let catalog = CatalogLoader::parse(SAMPLE).unwrap();

        let warlord = catalog.general(&"warlord".into()).unwrap();
        let cleave = warlord.skill(&"cleave".into()).unwrap();
        assert_eq!(cleave.target_zone, TargetZone::Radius);
        assert_eq!(cleave.target_type, TargetType::Enemy);
        assert_eq!(cleave.effect, SkillEffect::Damage { base_power: 2 });
        assert_eq!(cleave.min_range, 0);
        assert_eq!(warlord.triggers.len(), 1);
        assert_eq!(catalog.summons(&"orcs".into()).len(), 1);
    }

    #[test]
    fn inverted_skill_range_is_rejected() {
        let broken = SAMPLE.replace("range: 1,", "range: 1, min_range: 3,");
        let error = CatalogLoader::parse(&broken).unwrap_err();
        assert!(error.to_string().contains("cleave"));
    }
}
