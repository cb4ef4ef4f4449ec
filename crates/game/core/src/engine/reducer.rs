//! Event handlers: the only code that mutates [`GameState`].
//!
//! Each handler mutates exactly the fields its payload names. After the
//! handler returns, the event is appended to the history unconditionally.

use tracing::{trace, warn};

use super::turns;
use crate::event::GameEvent;
use crate::state::{CharacterId, Entity, EntityId, EntityKind, GameState, PlayerId, Position, SkillId};

/// Applies `event` to `state` and appends it to the history.
pub(crate) fn reduce(state: &mut GameState, event: GameEvent) {
    trace!(kind = event.kind(), subject = %event.subject(), "reducing event");

    match &event {
        GameEvent::EntityMoved { entity_id, path } => entity_moved(state, *entity_id, path),
        GameEvent::SoldierSummoned {
            entity_id,
            summoner_id,
            owner,
            character_id,
            position,
        } => soldier_summoned(state, *entity_id, *summoner_id, owner, character_id, *position),
        GameEvent::SkillCast {
            caster_id,
            skill_id,
            ..
        } => skill_cast(state, *caster_id, skill_id),
        GameEvent::EndTurn { entity_id } => end_turn(state, *entity_id),
        GameEvent::DealDamage {
            target_id, amount, ..
        } => deal_damage(state, *target_id, *amount),
        GameEvent::EntityDied { target_id, .. } => entity_died(state, *target_id),
        GameEvent::Heal {
            target_id, amount, ..
        } => heal(state, *target_id, *amount),
    }

    state.history.push(event);
}

fn entity_mut<'s>(state: &'s mut GameState, id: EntityId, kind: &str) -> Option<&'s mut Entity> {
    let entity = state.entities.get_mut(id);
    if entity.is_none() {
        warn!(entity = %id, kind, "event references a missing entity");
    }
    entity
}

fn entity_moved(state: &mut GameState, id: EntityId, path: &[Position]) {
    let Some(destination) = path.last().copied() else {
        return;
    };
    if let Some(entity) = entity_mut(state, id, "entity_moved") {
        entity.position = destination;
        entity.ap = entity.ap.saturating_sub(path.len() as u32);
    }
}

fn soldier_summoned(
    state: &mut GameState,
    id: EntityId,
    summoner_id: EntityId,
    owner: &PlayerId,
    character_id: &CharacterId,
    position: Position,
) {
    if id != state.next_entity_id() {
        warn!(entity = %id, expected = %state.next_entity_id(), "summoned id out of sequence");
        return;
    }
    let Some(summoner) = entity_mut(state, summoner_id, "soldier_summoned") else {
        return;
    };
    let Some(general) = summoner.general_mut() else {
        warn!(entity = %summoner_id, "summoner is not a general");
        return;
    };
    let Some(blueprint) = general.summon_blueprint(character_id).cloned() else {
        warn!(entity = %summoner_id, %character_id, "summoner cannot summon this soldier");
        return;
    };

    general.summon_budget = general.summon_budget.saturating_sub(blueprint.cost);
    state.entities.push(Entity::new(
        id,
        owner.clone(),
        position,
        blueprint,
        EntityKind::Soldier,
    ));
    state.next_entity_id += 1;
}

fn skill_cast(state: &mut GameState, id: EntityId, skill_id: &SkillId) {
    let Some(caster) = entity_mut(state, id, "skill_cast") else {
        return;
    };
    match caster.blueprint.skill(skill_id).map(|skill| skill.cost) {
        Some(cost) => caster.ap = caster.ap.saturating_sub(cost),
        None => warn!(entity = %id, %skill_id, "caster does not know this skill"),
    }
}

fn end_turn(state: &mut GameState, id: EntityId) {
    if state.turn.active_entity_id != Some(id) {
        warn!(entity = %id, "end of turn for an inactive entity");
    }
    if let Err(error) = turns::tick_until_active_entity(state) {
        warn!(%error, "no entity can take the next turn");
    }
}

fn deal_damage(state: &mut GameState, id: EntityId, amount: u32) {
    if let Some(target) = entity_mut(state, id, "deal_damage") {
        target.hp = target.hp.saturating_sub(amount);
    }
}

fn entity_died(state: &mut GameState, id: EntityId) {
    if let Some(target) = entity_mut(state, id, "entity_died") {
        target.hp = 0;
        target.ap = 0;
    }
}

fn heal(state: &mut GameState, id: EntityId, amount: u32) {
    if let Some(target) = entity_mut(state, id, "heal") {
        if target.is_alive() {
            target.hp = target.hp.saturating_add(amount).min(target.max_hp());
        }
    }
}
