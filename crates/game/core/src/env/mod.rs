//! Traits and types describing read-only catalog data.
//!
//! The catalog (generals, soldiers, skills) is external content. The core only
//! consults it through [`CatalogOracle`] when a game is created; afterwards the
//! blueprints a game needs live inside the state so replay is self-contained.
mod blueprint;
mod skills;

pub use blueprint::{
    Aura, AuraStat, Blueprint, BlueprintBuilder, Trigger, TriggerEffect, TriggerEvent,
};
pub use skills::{SkillData, SkillEffect, TargetType, TargetZone};

use crate::state::{CharacterId, FactionId};

/// Static lookup of blueprints keyed by character id.
pub trait CatalogOracle: Send + Sync {
    /// Blueprint of a general that a player may pick.
    fn general(&self, id: &CharacterId) -> Option<Blueprint>;

    /// Soldiers a general of the given faction may summon.
    fn summons(&self, faction: &FactionId) -> Vec<Blueprint>;
}

impl<T: CatalogOracle + ?Sized> CatalogOracle for &T {
    fn general(&self, id: &CharacterId) -> Option<Blueprint> {
        (**self).general(id)
    }

    fn summons(&self, faction: &FactionId) -> Vec<Blueprint> {
        (**self).summons(faction)
    }
}
