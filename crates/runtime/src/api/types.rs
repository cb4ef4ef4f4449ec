use serde::{Deserialize, Serialize};
use skirmish_core::{
    Action, CharacterId, EndTurnAction, EntityId, GameState, MoveAction, PlayerId, Position,
    SkillId, SummonAction, UseSkillAction,
};

use crate::repository::{GamePlayerRecord, GameRecord, UserId};

/// An action as submitted by a client. The acting player is never taken
/// from the request; the service fills in the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ActionRequest {
    Move {
        target: Position,
    },
    Summon {
        character_id: CharacterId,
        target: Position,
    },
    UseSkill {
        skill_id: SkillId,
        target: Position,
    },
    EndTurn,
}

impl ActionRequest {
    pub fn into_action(self, player: PlayerId) -> Action {
        match self {
            ActionRequest::Move { target } => MoveAction::new(player, target).into(),
            ActionRequest::Summon {
                character_id,
                target,
            } => SummonAction::new(player, character_id, target).into(),
            ActionRequest::UseSkill { skill_id, target } => {
                UseSkillAction::new(player, skill_id, target).into()
            }
            ActionRequest::EndTurn => EndTurnAction::new(player).into(),
        }
    }
}

/// A game as shown to clients: the stored rows plus, once both seats are
/// filled, the replayed state and the upcoming turn order. `winner` is set
/// once the match ended by surrender or by wiping out one side.
#[derive(Clone, Debug)]
pub struct GameDetail {
    pub game: GameRecord,
    pub players: Vec<GamePlayerRecord>,
    pub state: Option<GameState>,
    pub timeline: Vec<EntityId>,
    pub winner: Option<UserId>,
}
