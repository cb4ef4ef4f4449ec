//! Blueprints: read-only stat and ability templates for generals and soldiers.

use super::SkillData;
use crate::state::{CharacterId, FactionId, SkillId};

/// Moment at which a [`Trigger`] fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEvent {
    /// The owning entity has just been granted a turn.
    TurnStart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriggerEffect {
    /// Heals the owning entity.
    Heal { amount: u32 },
}

/// Reactive behaviour attached to a blueprint.
///
/// Triggers are fired by the action pipeline and surface as regular events,
/// never from inside a reducer handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trigger {
    pub on: TriggerEvent,
    pub effect: TriggerEffect,
}

impl Trigger {
    pub const fn regeneration(amount: u32) -> Self {
        Self {
            on: TriggerEvent::TurnStart,
            effect: TriggerEffect::Heal { amount },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuraStat {
    Attack,
    Defense,
}

/// Passive stat modifier granted to the source and its living allies within `radius`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aura {
    pub stat: AuraStat,
    pub amount: i32,
    /// Chebyshev radius around the source.
    pub radius: u32,
}

/// Static combat template referenced by every entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blueprint {
    pub character_id: CharacterId,
    pub faction: FactionId,
    pub name: String,
    /// Summon budget spent when a general summons this blueprint.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: u32,
    pub initiative: u32,
    pub max_hp: u32,
    pub max_ap: u32,
    pub attack: u32,
    pub defense: u32,
    /// Budget restored at the start of each turn (generals only).
    #[cfg_attr(feature = "serde", serde(default))]
    pub summon_budget: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub triggers: Vec<Trigger>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub auras: Vec<Aura>,
}

impl Blueprint {
    pub fn builder(
        character_id: impl Into<CharacterId>,
        faction: impl Into<FactionId>,
        name: impl Into<String>,
    ) -> BlueprintBuilder {
        BlueprintBuilder::new(character_id, faction, name)
    }

    pub fn skill(&self, id: &SkillId) -> Option<&SkillData> {
        self.skills.iter().find(|skill| &skill.id == id)
    }
}

/// Builder for [`Blueprint`]s with sensible defaults (3 AP, 10 HP).
#[derive(Clone, Debug)]
pub struct BlueprintBuilder {
    blueprint: Blueprint,
}

impl BlueprintBuilder {
    pub const DEFAULT_MAX_AP: u32 = 3;
    pub const DEFAULT_MAX_HP: u32 = 10;

    pub fn new(
        character_id: impl Into<CharacterId>,
        faction: impl Into<FactionId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            blueprint: Blueprint {
                character_id: character_id.into(),
                faction: faction.into(),
                name: name.into(),
                cost: 0,
                initiative: 1,
                max_hp: Self::DEFAULT_MAX_HP,
                max_ap: Self::DEFAULT_MAX_AP,
                attack: 0,
                defense: 0,
                summon_budget: 0,
                skills: Vec::new(),
                triggers: Vec::new(),
                auras: Vec::new(),
            },
        }
    }

    pub fn cost(mut self, cost: u32) -> Self {
        self.blueprint.cost = cost;
        self
    }

    pub fn initiative(mut self, initiative: u32) -> Self {
        self.blueprint.initiative = initiative;
        self
    }

    pub fn hp(mut self, max_hp: u32) -> Self {
        self.blueprint.max_hp = max_hp;
        self
    }

    pub fn ap(mut self, max_ap: u32) -> Self {
        self.blueprint.max_ap = max_ap;
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.blueprint.attack = attack;
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.blueprint.defense = defense;
        self
    }

    pub fn summon_budget(mut self, budget: u32) -> Self {
        self.blueprint.summon_budget = budget;
        self
    }

    pub fn skill(mut self, skill: SkillData) -> Self {
        self.blueprint.skills.push(skill);
        self
    }

    pub fn trigger(mut self, trigger: Trigger) -> Self {
        self.blueprint.triggers.push(trigger);
        self
    }

    pub fn aura(mut self, aura: Aura) -> Self {
        self.blueprint.auras.push(aura);
        self
    }

    pub fn build(self) -> Blueprint {
        self.blueprint
    }
}
