use crate::ability;
use crate::action::{ActionError, ActionTransition};
use crate::engine::GameEngine;
use crate::event::GameEvent;
use crate::state::{CharacterId, EntityId, GameState, PlayerId, Position};

/// The active general summons a soldier onto an adjacent empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonAction {
    pub player_id: PlayerId,
    pub character_id: CharacterId,
    pub target: Position,
}

impl SummonAction {
    pub fn new(
        player_id: impl Into<PlayerId>,
        character_id: impl Into<CharacterId>,
        target: Position,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            character_id: character_id.into(),
            target,
        }
    }
}

pub struct SummonPlan {
    summoner_id: EntityId,
    entity_id: EntityId,
}

impl ActionTransition for SummonAction {
    type Error = ActionError;
    type Plan = SummonPlan;

    fn player(&self) -> &PlayerId {
        &self.player_id
    }

    fn pre_validate(&self, state: &GameState) -> Result<Self::Plan, Self::Error> {
        let (general, _) =
            ability::check_summon(state, &self.player_id, &self.character_id, self.target)?;
        Ok(SummonPlan {
            summoner_id: general.id,
            entity_id: state.next_entity_id(),
        })
    }

    fn apply(&self, plan: Self::Plan, engine: &mut GameEngine<'_>) {
        engine.apply(GameEvent::SoldierSummoned {
            entity_id: plan.entity_id,
            summoner_id: plan.summoner_id,
            owner: self.player_id.clone(),
            character_id: self.character_id.clone(),
            position: self.target,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityKind;
    use crate::test_support::{ALICE, BOB, TestBoard};

    fn board() -> GameState {
        TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .build()
    }

    #[test]
    fn summon_on_empty_cell_emits_one_event_with_next_id() {
        let mut state = board();
        let expected_id = state.next_entity_id();

        let events = GameEngine::new(&mut state)
            .dispatch(&SummonAction::new(ALICE, "grunt", Position::new(3, 5)).into())
            .to_vec();

        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            GameEvent::SoldierSummoned { entity_id, .. } if *entity_id == expected_id
        ));

        let soldier = state.entity(expected_id).unwrap();
        assert_eq!(soldier.kind, EntityKind::Soldier);
        assert_eq!(soldier.owner, PlayerId::from(ALICE));
        assert_eq!(soldier.hp, soldier.max_hp());
        assert_eq!(state.next_entity_id(), EntityId(3));

        let general = state.entity(EntityId(0)).and_then(|e| e.general()).unwrap();
        assert_eq!(general.summon_budget, 0);
    }

    #[test]
    fn summon_on_occupied_cell_is_rejected() {
        let mut state = TestBoard::new()
            .general(ALICE, 7, (2, 5))
            .general(BOB, 5, (8, 5))
            .soldier(BOB, 1, (3, 5))
            .build();
        let before = state.clone();

        let events = GameEngine::new(&mut state)
            .dispatch(&SummonAction::new(ALICE, "grunt", Position::new(3, 5)).into())
            .len();

        assert_eq!(events, 0);
        assert_eq!(state, before);
    }

    #[test]
    fn budget_is_spent_until_the_next_turn() {
        let mut state = board();
        let mut engine = GameEngine::new(&mut state);

        let first = engine
            .dispatch(&SummonAction::new(ALICE, "grunt", Position::new(3, 5)).into())
            .len();
        let second = engine
            .dispatch(&SummonAction::new(ALICE, "grunt", Position::new(2, 4)).into())
            .len();

        assert_eq!((first, second), (1, 0));
    }
}
