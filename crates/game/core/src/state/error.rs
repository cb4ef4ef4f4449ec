//! Errors raised while building the initial game state.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, PlayerId, Position};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("unknown general `{character_id}` picked by player {player}")]
    UnknownGeneral {
        player: PlayerId,
        character_id: CharacterId,
    },

    #[error("both seats are taken by player {player}")]
    DuplicatePlayer { player: PlayerId },

    #[error("map of {width}x{height} cannot host both generals")]
    MapTooSmall { width: u32, height: u32 },

    #[error("general of player {player} would start on blocked cell {position}")]
    BlockedStart { player: PlayerId, position: Position },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            UnknownGeneral { .. } => "SETUP_UNKNOWN_GENERAL",
            DuplicatePlayer { .. } => "SETUP_DUPLICATE_PLAYER",
            MapTooSmall { .. } => "SETUP_MAP_TOO_SMALL",
            BlockedStart { .. } => "SETUP_BLOCKED_START",
        }
    }
}
