//! State-transition events.
//!
//! A [`GameEvent`] carries exactly the data needed to replay it: ids,
//! coordinates and amounts that were resolved when the event was emitted.
//! Nothing in a payload is derived again or drawn at random during replay.

use crate::state::{CharacterId, EntityId, PlayerId, Position, SkillId};

#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// Moves an entity along `path` (origin excluded, destination last) and
    /// spends one AP per step.
    EntityMoved {
        entity_id: EntityId,
        path: Vec<Position>,
    },

    /// A general summons a soldier of its own side onto `position`.
    SoldierSummoned {
        entity_id: EntityId,
        summoner_id: EntityId,
        owner: PlayerId,
        character_id: CharacterId,
        position: Position,
    },

    /// A skill was cast at `target`; spends the skill's AP cost.
    SkillCast {
        caster_id: EntityId,
        skill_id: SkillId,
        target: Position,
    },

    /// The active entity ends its turn and the ATB scheduler picks the next one.
    EndTurn { entity_id: EntityId },

    DealDamage {
        source_id: EntityId,
        target_id: EntityId,
        amount: u32,
    },

    EntityDied {
        source_id: EntityId,
        target_id: EntityId,
    },

    Heal {
        source_id: EntityId,
        target_id: EntityId,
        amount: u32,
    },
}

impl GameEvent {
    /// Stable snake_case name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// The entity primarily affected by this event.
    pub fn subject(&self) -> EntityId {
        match self {
            GameEvent::EntityMoved { entity_id, .. }
            | GameEvent::SoldierSummoned { entity_id, .. }
            | GameEvent::EndTurn { entity_id } => *entity_id,
            GameEvent::SkillCast { caster_id, .. } => *caster_id,
            GameEvent::DealDamage { target_id, .. }
            | GameEvent::EntityDied { target_id, .. }
            | GameEvent::Heal { target_id, .. } => *target_id,
        }
    }
}
