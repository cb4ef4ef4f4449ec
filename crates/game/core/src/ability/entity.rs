//! Checks whose subject is an entity: moving and casting.

use crate::action::ActionError;
use crate::env::SkillData;
use crate::pathfinding::PathFinder;
use crate::state::{Entity, EntityId, GameState, Position, SkillId};

/// The entity, provided it exists, is alive and is taking its turn.
pub fn check_active(state: &GameState, entity_id: EntityId) -> Result<&Entity, ActionError> {
    let entity = state
        .entity(entity_id)
        .ok_or(ActionError::EntityNotFound(entity_id))?;
    if !entity.is_alive() {
        return Err(ActionError::EntityDead(entity_id));
    }
    if state.active_entity_id() != Some(entity_id) {
        return Err(ActionError::NotActive { entity: entity_id });
    }
    Ok(entity)
}

/// Validates that `entity_id` knows `skill_id` and has the AP to cast it.
pub fn check_cast<'s>(
    state: &'s GameState,
    entity_id: EntityId,
    skill_id: &SkillId,
) -> Result<&'s SkillData, ActionError> {
    let entity = check_active(state, entity_id)?;
    let skill = entity
        .blueprint
        .skill(skill_id)
        .ok_or_else(|| ActionError::UnknownSkill(skill_id.clone()))?;
    if entity.ap < skill.cost {
        return Err(ActionError::InsufficientAp {
            required: skill.cost,
            available: entity.ap,
        });
    }
    Ok(skill)
}

pub fn can_cast(state: &GameState, entity_id: EntityId, skill_id: &SkillId) -> bool {
    check_cast(state, entity_id, skill_id).is_ok()
}

/// Resolves the path `entity_id` would walk to reach `target`, provided it
/// exists and fits in the remaining AP.
pub fn check_move(
    state: &GameState,
    entity_id: EntityId,
    target: Position,
) -> Result<Vec<Position>, ActionError> {
    let entity = check_active(state, entity_id)?;
    if !state.map().contains(target) {
        return Err(ActionError::OutOfBounds(target));
    }

    let path = PathFinder::new(state, entity_id)
        .map(|finder| finder.find_path(target))
        .unwrap_or_default();
    if path.is_empty() {
        return Err(ActionError::NoPath(target));
    }

    let cost = path.len() as u32;
    if cost > entity.ap {
        return Err(ActionError::InsufficientAp {
            required: cost,
            available: entity.ap,
        });
    }
    Ok(path)
}

pub fn can_move_to(state: &GameState, entity_id: EntityId, target: Position) -> bool {
    check_move(state, entity_id, target).is_ok()
}

/// Cells the entity can reach with its remaining AP, with their cost.
pub fn movable_cells(state: &GameState, entity_id: EntityId) -> Vec<(Position, u32)> {
    let Ok(entity) = check_active(state, entity_id) else {
        return Vec::new();
    };
    PathFinder::new(state, entity_id)
        .map(|finder| finder.reachable_cells(entity.ap))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, ALICE, BOB, TestBoard};

    fn board() -> GameState {
        TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .build()
    }

    #[test]
    fn move_within_ap_is_allowed_and_beyond_is_refused() {
        let state = board();
        let active = EntityId(0);
        assert_eq!(state.entity(active).unwrap().ap, 3);

        assert_eq!(check_move(&state, active, Position::new(5, 5)).map(|p| p.len()), Ok(3));
        assert_eq!(
            check_move(&state, active, Position::new(6, 5)).err(),
            Some(ActionError::InsufficientAp {
                required: 4,
                available: 3
            })
        );
    }

    #[test]
    fn only_the_active_entity_may_move() {
        let state = board();
        assert_eq!(
            check_move(&state, EntityId(1), Position::new(8, 4)).err(),
            Some(ActionError::NotActive {
                entity: EntityId(1)
            })
        );
        assert_eq!(
            check_move(&state, EntityId(9), Position::new(8, 4)).err(),
            Some(ActionError::EntityNotFound(EntityId(9)))
        );
    }

    #[test]
    fn blocked_or_own_cell_has_no_path() {
        let state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .soldier(BOB, 1, (3, 5))
            .build();

        assert_eq!(
            check_move(&state, EntityId(0), Position::new(3, 5)).err(),
            Some(ActionError::NoPath(Position::new(3, 5)))
        );
        assert_eq!(
            check_move(&state, EntityId(0), Position::new(2, 5)).err(),
            Some(ActionError::NoPath(Position::new(2, 5)))
        );
        assert_eq!(
            check_move(&state, EntityId(0), Position::new(20, 5)).err(),
            Some(ActionError::OutOfBounds(Position::new(20, 5)))
        );
    }

    #[test]
    fn cast_requires_known_skill_and_ap() {
        let mut state = board();
        let melee = SkillId::from("melee_attack");

        assert!(can_cast(&state, EntityId(0), &melee));
        assert_eq!(
            check_cast(&state, EntityId(0), &"fireball".into()).err(),
            Some(ActionError::UnknownSkill("fireball".into()))
        );

        test_support::set_ap(&mut state, EntityId(0), 1);
        assert_eq!(
            check_cast(&state, EntityId(0), &melee).err(),
            Some(ActionError::InsufficientAp {
                required: 2,
                available: 1
            })
        );
    }

    #[test]
    fn movable_cells_follow_remaining_ap() {
        let mut state = board();
        assert!(movable_cells(&state, EntityId(0)).iter().all(|&(_, cost)| cost <= 3));

        test_support::set_ap(&mut state, EntityId(0), 1);
        assert_eq!(movable_cells(&state, EntityId(0)).len(), 4);
        assert!(movable_cells(&state, EntityId(1)).is_empty());
    }
}
