//! Static skill definitions.
//!
//! Skills are catalog data: the simulation never mutates them. What a skill
//! does when cast is described by [`SkillEffect`] and carried out by the
//! action pipeline, so every consequence of a cast is an ordinary event.

use crate::state::SkillId;

/// Geometric shape that constrains which cells a skill may target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TargetZone {
    /// Same row or same column as the caster.
    Line,
    /// Any cell within Chebyshev range.
    Radius,
}

/// What must be on the targeted cell for a cast to be legal.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TargetType {
    /// The caster's own cell.
    #[strum(serialize = "SELF")]
    #[cfg_attr(feature = "serde", serde(rename = "SELF"))]
    SelfTarget,
    /// Any walkable cell, occupied or not.
    Ground,
    /// A living entity of the caster's side other than the caster.
    Ally,
    /// A living entity of the opposing side.
    Enemy,
    /// A walkable cell with no living occupant.
    Empty,
}

/// Consequence of a successful cast, resolved against the target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Deals `max(base_power, attack - defense)` to the entity on the target cell.
    Damage { base_power: u32 },
    /// Restores a flat amount of HP to the entity on the target cell.
    Heal { amount: u32 },
}

/// Static catalog entry describing a castable skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillData {
    pub id: SkillId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// AP spent by the caster.
    pub cost: u32,
    pub range: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_range: u32,
    pub target_zone: TargetZone,
    pub target_type: TargetType,
    pub effect: SkillEffect,
}

impl SkillData {
    pub fn new(
        id: impl Into<SkillId>,
        name: impl Into<String>,
        target_zone: TargetZone,
        target_type: TargetType,
        effect: SkillEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost: 0,
            range: 0,
            min_range: 0,
            target_zone,
            target_type,
            effect,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_range(mut self, min_range: u32, range: u32) -> Self {
        self.min_range = min_range;
        self.range = range;
        self
    }
}
