//! Checks whose subject is a player: turn ownership and summoning.

use crate::action::ActionError;
use crate::env::Blueprint;
use crate::lifecycle;
use crate::state::{CharacterId, Entity, GameState, PlayerId, Position};

/// The active entity, provided it is alive and owned by `player` and the
/// game is still running.
pub fn check_turn<'s>(state: &'s GameState, player: &PlayerId) -> Result<&'s Entity, ActionError> {
    if lifecycle::is_finished(state) {
        return Err(ActionError::GameFinished);
    }
    let active_id = state.active_entity_id().ok_or(ActionError::NoActiveEntity)?;
    let active = state
        .entity(active_id)
        .ok_or(ActionError::EntityNotFound(active_id))?;
    if !active.is_alive() {
        return Err(ActionError::EntityDead(active_id));
    }
    if !active.is_owned_by(player) {
        return Err(ActionError::NotYourTurn {
            player: player.clone(),
            active: active_id,
        });
    }
    Ok(active)
}

/// Whether `player` may act right now.
pub fn can_act(state: &GameState, player: &PlayerId) -> bool {
    check_turn(state, player).is_ok()
}

/// Ending a turn only requires owning it.
pub fn can_end_turn(state: &GameState, player: &PlayerId) -> bool {
    can_act(state, player)
}

/// Validates that `player`'s active general may summon `character_id` onto
/// `position`. Returns the general and the blueprint to summon.
pub fn check_summon<'s>(
    state: &'s GameState,
    player: &PlayerId,
    character_id: &CharacterId,
    position: Position,
) -> Result<(&'s Entity, &'s Blueprint), ActionError> {
    let general = check_turn(state, player)?;
    let general_state = general
        .general()
        .ok_or(ActionError::NotAGeneral(general.id))?;
    let blueprint = general_state
        .summon_blueprint(character_id)
        .ok_or_else(|| ActionError::UnknownSummon(character_id.clone()))?;

    if general_state.summon_budget < blueprint.cost {
        return Err(ActionError::InsufficientSummonBudget {
            required: blueprint.cost,
            available: general_state.summon_budget,
        });
    }

    let view = state
        .cell_view(position)
        .ok_or(ActionError::OutOfBounds(position))?;
    if !view.is_walkable() {
        return Err(ActionError::NotWalkable(position));
    }
    if let Some(occupant) = view.occupant {
        return Err(ActionError::Occupied { position, occupant });
    }
    let range = state.config().summon_range;
    if general.position.chebyshev_distance(position) > range {
        return Err(ActionError::OutOfSummonRange { position, range });
    }

    Ok((general, blueprint))
}

pub fn can_summon_at(
    state: &GameState,
    player: &PlayerId,
    character_id: &CharacterId,
    position: Position,
) -> bool {
    check_summon(state, player, character_id, position).is_ok()
}

/// Every cell where `character_id` could be summoned right now.
pub fn summonable_cells(
    state: &GameState,
    player: &PlayerId,
    character_id: &CharacterId,
) -> Vec<Position> {
    state
        .map()
        .cells()
        .map(|(position, _)| position)
        .filter(|&position| can_summon_at(state, player, character_id, position))
        .collect()
}
