use crate::ability;
use crate::action::{ActionError, ActionTransition};
use crate::engine::GameEngine;
use crate::event::GameEvent;
use crate::state::{EntityId, GameState, PlayerId, Position};

/// Walks the active entity to `target` along the shortest path.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub player_id: PlayerId,
    pub target: Position,
}

impl MoveAction {
    pub fn new(player_id: impl Into<PlayerId>, target: Position) -> Self {
        Self {
            player_id: player_id.into(),
            target,
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;
    type Plan = (EntityId, Vec<Position>);

    fn player(&self) -> &PlayerId {
        &self.player_id
    }

    fn pre_validate(&self, state: &GameState) -> Result<Self::Plan, Self::Error> {
        let mover = ability::check_turn(state, &self.player_id)?;
        let path = ability::check_move(state, mover.id, self.target)?;
        Ok((mover.id, path))
    }

    fn apply(&self, (entity_id, path): Self::Plan, engine: &mut GameEngine<'_>) {
        engine.apply(GameEvent::EntityMoved { entity_id, path });
    }
}
