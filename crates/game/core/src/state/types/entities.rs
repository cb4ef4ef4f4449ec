use std::collections::BTreeMap;

use super::{CharacterId, EntityId, PlayerId, Position};
use crate::env::Blueprint;

/// Variant-specific data of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    General(GeneralState),
    Soldier,
}

/// Extra state carried by generals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralState {
    /// Summon budget left for the current turn. Restored on activation.
    pub summon_budget: u32,
    /// Soldiers this general may summon, resolved from the catalog at creation.
    pub summon_blueprints: BTreeMap<CharacterId, Blueprint>,
}

impl GeneralState {
    pub fn new(summon_budget: u32, summons: impl IntoIterator<Item = Blueprint>) -> Self {
        Self {
            summon_budget,
            summon_blueprints: summons
                .into_iter()
                .map(|blueprint| (blueprint.character_id.clone(), blueprint))
                .collect(),
        }
    }

    pub fn summon_blueprint(&self, id: &CharacterId) -> Option<&Blueprint> {
        self.summon_blueprints.get(id)
    }
}

/// A general or soldier on the board.
///
/// Entities are never removed: death is `hp == 0`, so ids stay valid indices
/// for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: EntityId,
    pub owner: PlayerId,
    pub position: Position,
    pub blueprint: Blueprint,
    pub hp: u32,
    pub ap: u32,
    /// Readiness gauge filled by the ATB scheduler.
    pub atb: u32,
    pub kind: EntityKind,
}

impl Entity {
    /// Creates an entity at full HP. AP stays empty until its first turn.
    pub fn new(
        id: EntityId,
        owner: PlayerId,
        position: Position,
        blueprint: Blueprint,
        kind: EntityKind,
    ) -> Self {
        Self {
            id,
            owner,
            position,
            hp: blueprint.max_hp,
            ap: 0,
            atb: 0,
            blueprint,
            kind,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_general(&self) -> bool {
        matches!(self.kind, EntityKind::General(_))
    }

    pub fn general(&self) -> Option<&GeneralState> {
        match &self.kind {
            EntityKind::General(general) => Some(general),
            EntityKind::Soldier => None,
        }
    }

    pub(crate) fn general_mut(&mut self) -> Option<&mut GeneralState> {
        match &mut self.kind {
            EntityKind::General(general) => Some(general),
            EntityKind::Soldier => None,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.blueprint.max_hp
    }

    pub fn max_ap(&self) -> u32 {
        self.blueprint.max_ap
    }

    pub fn initiative(&self) -> u32 {
        self.blueprint.initiative
    }

    pub fn is_owned_by(&self, player: &PlayerId) -> bool {
        &self.owner == player
    }
}

/// Dense arena of every entity ever created, indexed by [`EntityId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    entities: Vec<Entity>,
}

impl EntitiesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// All entities in id order, dead ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn living(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_alive())
    }

    pub fn living_owned_by<'a>(
        &'a self,
        player: &'a PlayerId,
    ) -> impl Iterator<Item = &'a Entity> + 'a {
        self.living().filter(move |entity| entity.is_owned_by(player))
    }

    /// The living entity standing on `position`, if any.
    pub fn at(&self, position: Position) -> Option<&Entity> {
        self.living().find(|entity| entity.position == position)
    }

    /// Appends an entity. Its id must equal the arena length.
    pub(crate) fn push(&mut self, entity: Entity) {
        debug_assert_eq!(entity.id.index(), self.entities.len());
        self.entities.push(entity);
    }
}
