//! Skill targeting: range, zone shape and target type.

use super::classify_cell;
use crate::action::ActionError;
use crate::env::{SkillData, TargetType, TargetZone};
use crate::state::{Entity, GameState, Position};

/// Whether `to` lies inside the skill's range and zone as cast from `from`.
pub fn is_in_cast_range(skill: &SkillData, from: Position, to: Position) -> bool {
    check_range(skill, from, to).is_ok()
}

/// Range is a Chebyshev band `min_range..=range`; `LINE` skills also need
/// the target on the caster's row or column.
pub fn check_range(skill: &SkillData, from: Position, to: Position) -> Result<(), ActionError> {
    let distance = from.chebyshev_distance(to);
    if distance < skill.min_range || distance > skill.range {
        return Err(ActionError::OutOfRange {
            distance,
            min_range: skill.min_range,
            range: skill.range,
        });
    }
    match skill.target_zone {
        TargetZone::Line if !from.is_aligned_with(to) => Err(ActionError::NotAligned(to)),
        TargetZone::Line | TargetZone::Radius => Ok(()),
    }
}

/// Validates that `caster` may aim `skill` at `target`.
pub fn check_target(
    state: &GameState,
    caster: &Entity,
    skill: &SkillData,
    target: Position,
) -> Result<(), ActionError> {
    let invalid = || ActionError::InvalidTarget {
        position: target,
        expected: skill.target_type,
    };

    if skill.target_type == TargetType::SelfTarget {
        return if target == caster.position {
            Ok(())
        } else {
            Err(invalid())
        };
    }

    if !state.map().contains(target) {
        return Err(ActionError::OutOfBounds(target));
    }
    check_range(skill, caster.position, target)?;

    if classify_cell(state, caster, target).accepts(skill.target_type) {
        Ok(())
    } else {
        Err(invalid())
    }
}

pub fn can_target(state: &GameState, caster: &Entity, skill: &SkillData, target: Position) -> bool {
    check_target(state, caster, skill, target).is_ok()
}

/// Every cell `caster` may aim `skill` at, in row-major order.
pub fn targetable_cells(state: &GameState, caster: &Entity, skill: &SkillData) -> Vec<Position> {
    state
        .map()
        .cells()
        .map(|(position, _)| position)
        .filter(|&position| can_target(state, caster, skill, position))
        .collect()
}
