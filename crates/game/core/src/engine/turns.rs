//! ATB turn scheduling.
//!
//! Every living entity owns a gauge that grows by its initiative once per
//! clock tick. The first entity whose gauge reaches
//! [`GameConfig::ATB_THRESHOLD`] takes the next turn.

use std::cmp::Reverse;

use crate::config::GameConfig;
use crate::state::{EntityId, GameState};

use super::GameEngine;

/// Errors that can occur while advancing the ATB timeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no living entity is left to take a turn")]
    NoLivingEntities,

    #[error("no eligible entity has initiative to fill its gauge")]
    Stalled,
}

/// Advances the clock until an eligible entity is ready, then activates it.
///
/// The entity that just ended its turn is skipped unless it is the only one
/// alive. On error the state is left untouched.
pub(crate) fn tick_until_active_entity(state: &mut GameState) -> Result<EntityId, TurnError> {
    let threshold = GameConfig::ATB_THRESHOLD;
    let living = state.entities.living().count();
    if living == 0 {
        return Err(TurnError::NoLivingEntities);
    }

    let excluded = match state.turn.active_entity_id {
        Some(id) if state.turn.turn_count > 0 && living > 1 => Some(id),
        _ => None,
    };
    let is_eligible = |id: EntityId| Some(id) != excluded;

    // Ticks needed before the fastest eligible entity is ready.
    let ticks = state
        .entities
        .living()
        .filter(|entity| is_eligible(entity.id))
        .filter_map(|entity| {
            let missing = threshold.saturating_sub(entity.atb);
            match (missing, entity.initiative()) {
                (0, _) => Some(0),
                (_, 0) => None,
                (missing, initiative) => Some(missing.div_ceil(initiative)),
            }
        })
        .min()
        .ok_or(TurnError::Stalled)?;

    if ticks > 0 {
        for entity in state.entities.iter_mut().filter(|entity| entity.is_alive()) {
            let gained = entity.initiative().saturating_mul(ticks);
            entity.atb = entity.atb.saturating_add(gained);
        }
        state.turn.clock += u64::from(ticks);
    }

    let next = state
        .entities
        .living()
        .filter(|entity| is_eligible(entity.id) && entity.atb >= threshold)
        .max_by_key(|entity| (entity.atb, state.seed_of(&entity.owner), Reverse(entity.id)))
        .map(|entity| entity.id)
        .ok_or(TurnError::Stalled)?;

    if let Some(entity) = state.entities.get_mut(next) {
        entity.atb -= threshold;
        entity.ap = entity.max_ap();
        let budget = entity.blueprint.summon_budget;
        if let Some(general) = entity.general_mut() {
            general.summon_budget = budget;
        }
    }
    state.turn.active_entity_id = Some(next);
    state.turn.turn_count += 1;

    tracing::trace!(
        entity = %next,
        clock = state.turn.clock,
        turn = state.turn.turn_count,
        "entity activated"
    );
    Ok(next)
}

/// Turn scheduling queries for GameEngine.
impl<'a> GameEngine<'a> {
    /// Returns the current ATB clock value.
    pub fn clock(&self) -> u64 {
        self.state.turn.clock
    }

    /// Returns the entity currently taking its turn.
    pub fn active_entity_id(&self) -> Option<EntityId> {
        self.state.turn.active_entity_id
    }
}
