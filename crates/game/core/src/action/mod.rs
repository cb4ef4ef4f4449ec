//! Player actions and the transition pipeline that turns them into events.
//!
//! Every action follows the same shape: `pre_validate` runs the capability
//! checks against the current state and resolves everything the action
//! needs into a plan; `apply` then emits events through the engine one at a
//! time, so later events are computed from the state earlier ones left.

mod end_turn;
mod error;
mod movement;
mod skill;
mod summon;

pub use end_turn::EndTurnAction;
pub use error::ActionError;
pub use movement::MoveAction;
pub use skill::UseSkillAction;
pub use summon::SummonAction;

use crate::engine::GameEngine;
use crate::state::{GameState, PlayerId};

/// Defines how a concrete action is validated and which events it emits.
pub trait ActionTransition {
    type Error;

    /// Facts resolved during validation and consumed by [`apply`](Self::apply).
    type Plan;

    /// The player submitting this action.
    fn player(&self) -> &PlayerId;

    /// Validates pre-conditions using the state **before** any event is applied.
    fn pre_validate(&self, state: &GameState) -> Result<Self::Plan, Self::Error>;

    /// Emits the action's events. Assumes `pre_validate` succeeded.
    fn apply(&self, plan: Self::Plan, engine: &mut GameEngine<'_>);
}

/// Closed set of actions a player may submit.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Summon(SummonAction),
    UseSkill(UseSkillAction),
    EndTurn(EndTurnAction),
}

impl Action {
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn player(&self) -> &PlayerId {
        match self {
            Action::Move(action) => action.player(),
            Action::Summon(action) => action.player(),
            Action::UseSkill(action) => action.player(),
            Action::EndTurn(action) => action.player(),
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<SummonAction> for Action {
    fn from(action: SummonAction) -> Self {
        Action::Summon(action)
    }
}

impl From<UseSkillAction> for Action {
    fn from(action: UseSkillAction) -> Self {
        Action::UseSkill(action)
    }
}

impl From<EndTurnAction> for Action {
    fn from(action: EndTurnAction) -> Self {
        Action::EndTurn(action)
    }
}
