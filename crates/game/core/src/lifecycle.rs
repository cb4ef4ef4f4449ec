//! Game lifecycle: lobby status machine and the derived "finished" predicate.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, PlayerId};

/// Lobby and match status of a game.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum GameStatus {
    WaitingForOpponent,
    WaitingForCreatorConfirmation,
    DeclinedByCreator,
    Ongoing,
    Ended,
}

/// Inputs that move a game through [`GameStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LobbyEvent {
    Join,
    Confirm,
    Decline,
    Finish,
    Surrender,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("cannot {event:?} a game that is {status}")]
    InvalidTransition {
        status: GameStatus,
        event: LobbyEvent,
    },
}

impl GameError for LifecycleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::InvalidTransition { .. } => "LIFECYCLE_INVALID_TRANSITION",
        }
    }
}

impl GameStatus {
    pub fn transition(self, event: LobbyEvent) -> Result<GameStatus, LifecycleError> {
        use GameStatus::*;
        match (self, event) {
            (WaitingForOpponent, LobbyEvent::Join) => Ok(WaitingForCreatorConfirmation),
            (WaitingForCreatorConfirmation, LobbyEvent::Confirm) => Ok(Ongoing),
            (WaitingForCreatorConfirmation, LobbyEvent::Decline) => Ok(DeclinedByCreator),
            (Ongoing, LobbyEvent::Finish | LobbyEvent::Surrender) => Ok(Ended),
            (status, event) => Err(LifecycleError::InvalidTransition { status, event }),
        }
    }

    /// Actions may only be submitted while the match is running.
    pub fn accepts_actions(self) -> bool {
        matches!(self, GameStatus::Ongoing)
    }

    /// Whether the game row may be deleted: a cancelled lobby or a
    /// declined join.
    pub fn can_remove(self) -> bool {
        matches!(
            self,
            GameStatus::WaitingForOpponent | GameStatus::DeclinedByCreator
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Ended | GameStatus::DeclinedByCreator)
    }
}

/// True once some player has no living entity left.
pub fn is_finished(state: &GameState) -> bool {
    state
        .players()
        .iter()
        .any(|slot| state.entities().living_owned_by(&slot.id).next().is_none())
}

/// The surviving player of a finished game.
pub fn winner(state: &GameState) -> Option<&PlayerId> {
    let [first, second] = state.players();
    let alive = |id: &PlayerId| state.entities().living_owned_by(id).next().is_some();
    match (alive(&first.id), alive(&second.id)) {
        (true, false) => Some(&first.id),
        (false, true) => Some(&second.id),
        _ => None,
    }
}
