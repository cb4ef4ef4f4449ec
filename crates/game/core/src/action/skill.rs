use crate::ability;
use crate::action::{ActionError, ActionTransition};
use crate::combat;
use crate::engine::GameEngine;
use crate::env::SkillEffect;
use crate::event::GameEvent;
use crate::lifecycle;
use crate::state::{EntityId, GameState, PlayerId, Position, SkillId};

use super::end_turn;

/// The active entity casts one of its skills at a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseSkillAction {
    pub player_id: PlayerId,
    pub skill_id: SkillId,
    pub target: Position,
}

impl UseSkillAction {
    pub fn new(player_id: impl Into<PlayerId>, skill_id: impl Into<SkillId>, target: Position) -> Self {
        Self {
            player_id: player_id.into(),
            skill_id: skill_id.into(),
            target,
        }
    }
}

impl ActionTransition for UseSkillAction {
    type Error = ActionError;
    type Plan = (EntityId, SkillEffect);

    fn player(&self) -> &PlayerId {
        &self.player_id
    }

    fn pre_validate(&self, state: &GameState) -> Result<Self::Plan, Self::Error> {
        let caster = ability::check_turn(state, &self.player_id)?;
        let skill = ability::check_cast(state, caster.id, &self.skill_id)?;
        ability::check_target(state, caster, skill, self.target)?;
        Ok((caster.id, skill.effect))
    }

    fn apply(&self, (caster_id, effect): Self::Plan, engine: &mut GameEngine<'_>) {
        engine.apply(GameEvent::SkillCast {
            caster_id,
            skill_id: self.skill_id.clone(),
            target: self.target,
        });

        if let Some(target_id) = engine.state().entity_at(self.target).map(|e| e.id) {
            resolve_effect(engine, caster_id, target_id, effect);
        }

        // A dead caster can no longer end its own turn.
        let state = engine.state();
        let caster_down = state.entity(caster_id).is_some_and(|e| !e.is_alive());
        if caster_down && !lifecycle::is_finished(state) {
            engine.apply(GameEvent::EndTurn {
                entity_id: caster_id,
            });
            end_turn::fire_turn_start_triggers(engine);
        }
    }
}

fn resolve_effect(
    engine: &mut GameEngine<'_>,
    caster_id: EntityId,
    target_id: EntityId,
    effect: SkillEffect,
) {
    match effect {
        SkillEffect::Damage { base_power } => {
            let state = engine.state();
            let (Some(caster), Some(target)) = (state.entity(caster_id), state.entity(target_id))
            else {
                return;
            };
            let amount = combat::damage_amount(state, caster, target, base_power);

            engine.apply(GameEvent::DealDamage {
                source_id: caster_id,
                target_id,
                amount,
            });
            if engine.state().entity(target_id).is_some_and(|e| !e.is_alive()) {
                engine.apply(GameEvent::EntityDied {
                    source_id: caster_id,
                    target_id,
                });
            }
        }
        SkillEffect::Heal { amount } => {
            engine.apply(GameEvent::Heal {
                source_id: caster_id,
                target_id,
                amount,
            });
        }
    }
}
