//! Derived combat stats and damage resolution.

use crate::env::AuraStat;
use crate::state::{Entity, GameState};

/// Sum of aura bonuses of `stat` reaching `entity` from living allies
/// (itself included).
fn aura_bonus(state: &GameState, entity: &Entity, stat: AuraStat) -> i64 {
    state
        .entities()
        .living_owned_by(&entity.owner)
        .flat_map(|source| {
            source
                .blueprint
                .auras
                .iter()
                .filter(move |aura| {
                    aura.stat == stat
                        && source.position.chebyshev_distance(entity.position) <= aura.radius
                })
        })
        .map(|aura| i64::from(aura.amount))
        .sum()
}

fn with_bonus(base: u32, bonus: i64) -> u32 {
    (i64::from(base) + bonus).clamp(0, i64::from(u32::MAX)) as u32
}

/// Attack including auras, never below zero.
pub fn effective_attack(state: &GameState, entity: &Entity) -> u32 {
    with_bonus(
        entity.blueprint.attack,
        aura_bonus(state, entity, AuraStat::Attack),
    )
}

/// Defense including auras, never below zero.
pub fn effective_defense(state: &GameState, entity: &Entity) -> u32 {
    with_bonus(
        entity.blueprint.defense,
        aura_bonus(state, entity, AuraStat::Defense),
    )
}

/// Damage dealt by `attacker` to `defender`: the larger of `base_power` and
/// the effective attack/defense difference.
pub fn damage_amount(
    state: &GameState,
    attacker: &Entity,
    defender: &Entity,
    base_power: u32,
) -> u32 {
    let attack = effective_attack(state, attacker);
    let defense = effective_defense(state, defender);
    attack.saturating_sub(defense).max(base_power)
}
