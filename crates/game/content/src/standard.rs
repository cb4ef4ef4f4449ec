//! Built-in factions, characters and skills.

use skirmish_core::{
    Aura, AuraStat, Blueprint, SkillData, SkillEffect, TargetType, TargetZone, Trigger,
};

use crate::Catalog;

pub mod ids {
    pub const HAVEN: &str = "haven";
    pub const NECRO: &str = "necro";

    pub const HAVEN_COMMANDER: &str = "haven_commander";
    pub const NECROMANCER: &str = "necromancer";

    pub const SWORDSMAN: &str = "swordsman";
    pub const HAVEN_ARCHER: &str = "haven_archer";
    pub const SKELETON: &str = "skeleton";

    pub const MELEE_ATTACK: &str = "melee_attack";
    pub const RANGED_ATTACK: &str = "ranged_attack";
    pub const DARK_MENDING: &str = "dark_mending";
}

pub fn melee_attack() -> SkillData {
    SkillData::new(
        ids::MELEE_ATTACK,
        "Melee attack",
        TargetZone::Radius,
        TargetType::Enemy,
        SkillEffect::Damage { base_power: 1 },
    )
    .with_description("Strikes an adjacent enemy.")
    .with_cost(2)
    .with_range(0, 1)
}

pub fn ranged_attack() -> SkillData {
    SkillData::new(
        ids::RANGED_ATTACK,
        "Ranged attack",
        TargetZone::Line,
        TargetType::Enemy,
        SkillEffect::Damage { base_power: 1 },
    )
    .with_description("Shoots an enemy on the same row or column.")
    .with_cost(2)
    .with_range(2, 5)
}

pub fn dark_mending() -> SkillData {
    SkillData::new(
        ids::DARK_MENDING,
        "Dark mending",
        TargetZone::Radius,
        TargetType::Ally,
        SkillEffect::Heal { amount: 3 },
    )
    .with_description("Knits the bones of a nearby ally.")
    .with_cost(2)
    .with_range(1, 2)
}

pub fn haven() -> (Blueprint, Vec<Blueprint>) {
    let commander = Blueprint::builder(ids::HAVEN_COMMANDER, ids::HAVEN, "Haven Commander")
        .initiative(6)
        .hp(20)
        .ap(3)
        .attack(2)
        .defense(2)
        .summon_budget(2)
        .skill(melee_attack())
        .aura(Aura {
            stat: AuraStat::Defense,
            amount: 1,
            radius: 1,
        })
        .build();

    let swordsman = Blueprint::builder(ids::SWORDSMAN, ids::HAVEN, "Swordsman")
        .cost(2)
        .initiative(5)
        .hp(12)
        .ap(3)
        .attack(2)
        .defense(2)
        .skill(melee_attack())
        .build();

    let archer = Blueprint::builder(ids::HAVEN_ARCHER, ids::HAVEN, "Archer")
        .cost(2)
        .initiative(6)
        .hp(5)
        .ap(4)
        .attack(2)
        .defense(0)
        .skill(ranged_attack())
        .build();

    (commander, vec![swordsman, archer])
}

pub fn necro() -> (Blueprint, Vec<Blueprint>) {
    let necromancer = Blueprint::builder(ids::NECROMANCER, ids::NECRO, "Necromancer")
        .initiative(5)
        .hp(18)
        .ap(3)
        .attack(1)
        .defense(1)
        .summon_budget(2)
        .skill(melee_attack())
        .skill(dark_mending())
        .trigger(Trigger::regeneration(1))
        .build();

    let skeleton = Blueprint::builder(ids::SKELETON, ids::NECRO, "Skeleton")
        .cost(2)
        .initiative(7)
        .hp(6)
        .ap(3)
        .attack(2)
        .defense(1)
        .skill(melee_attack())
        .build();

    (necromancer, vec![skeleton])
}

impl Catalog {
    /// Catalog with every built-in faction.
    pub fn standard() -> Self {
        let (generals, soldiers): (Vec<_>, Vec<_>) = [haven(), necro()].into_iter().unzip();
        Catalog::from_parts(generals, soldiers.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{CatalogOracle, FactionId};

    use super::*;

    #[test]
    fn standard_catalog_has_one_general_per_faction() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.generals().count(), 2);
        assert_eq!(
            catalog.factions(),
            vec![FactionId::from(ids::HAVEN), FactionId::from(ids::NECRO)]
        );
        for general in catalog.generals() {
            assert!(general.summon_budget > 0);
            assert!(!catalog.summons(&general.faction).is_empty());
        }
    }

    #[test]
    fn every_soldier_is_affordable_by_its_general() {
        let catalog = Catalog::standard();
        for general in catalog.generals() {
            for soldier in catalog.summons(&general.faction) {
                assert!(soldier.cost <= general.summon_budget, "{}", soldier.character_id);
            }
        }
    }
}
