use crate::ability;
use crate::action::{ActionError, ActionTransition};
use crate::engine::GameEngine;
use crate::env::{TriggerEffect, TriggerEvent};
use crate::event::GameEvent;
use crate::state::{EntityId, GameState, PlayerId};

/// Ends the active entity's turn and hands control to the ATB scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction {
    pub player_id: PlayerId,
}

impl EndTurnAction {
    pub fn new(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
        }
    }
}

impl ActionTransition for EndTurnAction {
    type Error = ActionError;
    type Plan = EntityId;

    fn player(&self) -> &PlayerId {
        &self.player_id
    }

    fn pre_validate(&self, state: &GameState) -> Result<Self::Plan, Self::Error> {
        ability::check_turn(state, &self.player_id).map(|active| active.id)
    }

    fn apply(&self, entity_id: Self::Plan, engine: &mut GameEngine<'_>) {
        engine.apply(GameEvent::EndTurn { entity_id });
        fire_turn_start_triggers(engine);
    }
}

/// Emits the events of the new active entity's `TurnStart` triggers.
pub(super) fn fire_turn_start_triggers(engine: &mut GameEngine<'_>) {
    let Some(active) = engine.state().active_entity() else {
        return;
    };
    let active_id = active.id;
    let triggers: Vec<TriggerEffect> = active
        .blueprint
        .triggers
        .iter()
        .filter(|trigger| trigger.on == TriggerEvent::TurnStart)
        .map(|trigger| trigger.effect)
        .collect();

    for effect in triggers {
        match effect {
            TriggerEffect::Heal { amount } => {
                let wounded = engine
                    .state()
                    .entity(active_id)
                    .is_some_and(|e| e.is_alive() && e.hp < e.max_hp());
                if wounded {
                    engine.apply(GameEvent::Heal {
                        source_id: active_id,
                        target_id: active_id,
                        amount,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Trigger;
    use crate::test_support::{self, ALICE, BOB, TestBoard};

    #[test]
    fn end_turn_passes_control_to_another_living_entity() {
        let mut state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .build();
        assert_eq!(state.active_entity_id(), Some(EntityId(0)));

        let events = GameEngine::new(&mut state)
            .dispatch(&EndTurnAction::new(ALICE).into())
            .to_vec();

        assert_eq!(events, vec![GameEvent::EndTurn { entity_id: EntityId(0) }]);
        let active = state.active_entity().unwrap();
        assert_eq!(active.id, EntityId(1));
        assert_eq!(active.ap, active.max_ap());
    }

    #[test]
    fn only_the_turn_owner_may_end_it() {
        let mut state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .build();

        let events = GameEngine::new(&mut state)
            .dispatch(&EndTurnAction::new(BOB).into())
            .len();

        assert_eq!(events, 0);
        assert_eq!(state.active_entity_id(), Some(EntityId(0)));
    }

    #[test]
    fn regeneration_fires_when_a_wounded_entity_starts_its_turn() {
        let mut troll = test_support::general_blueprint(5);
        troll.triggers.push(Trigger::regeneration(2));
        let mut state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general_with(BOB, troll, (8, 5))
            .build();
        test_support::set_hp(&mut state, EntityId(1), 5);

        let events = GameEngine::new(&mut state)
            .dispatch(&EndTurnAction::new(ALICE).into())
            .to_vec();

        assert_eq!(
            events,
            vec![
                GameEvent::EndTurn { entity_id: EntityId(0) },
                GameEvent::Heal {
                    source_id: EntityId(1),
                    target_id: EntityId(1),
                    amount: 2,
                },
            ]
        );
        assert_eq!(state.entity(EntityId(1)).unwrap().hp, 7);
    }

    #[test]
    fn regeneration_is_skipped_at_full_health() {
        let mut troll = test_support::general_blueprint(5);
        troll.triggers.push(Trigger::regeneration(2));
        let mut state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general_with(BOB, troll, (8, 5))
            .build();

        let events = GameEngine::new(&mut state)
            .dispatch(&EndTurnAction::new(ALICE).into())
            .len();
        assert_eq!(events, 1);
    }
}
