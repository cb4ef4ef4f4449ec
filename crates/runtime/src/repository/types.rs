use std::fmt;

use serde::{Deserialize, Serialize};
use skirmish_core::{CharacterId, GameConfig, GameStatus, PlayerId};

/// Users are identified by the same id the rules use for players.
pub type UserId = PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerRecordId(pub u64);

impl fmt::Display for PlayerRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A game document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub creator: UserId,
    pub status: GameStatus,
    /// Rules configuration captured at creation. Replays always use this
    /// copy, whatever the service is configured with later.
    pub config: GameConfig,
    /// Encoded event history; `None` until the first event is persisted.
    pub history: Option<Vec<u8>>,
    /// The participant who conceded, if the match ended by surrender.
    pub surrendered_by: Option<UserId>,
}

/// One seat of a game. The ATB seed is drawn when the row is inserted and
/// never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayerRecord {
    pub id: PlayerRecordId,
    pub game_id: GameId,
    pub user_id: UserId,
    pub general_id: CharacterId,
    pub atb_seed: u64,
}

/// Partial update of a [`GameRecord`]. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GamePatch {
    pub status: Option<GameStatus>,
    pub history: Option<Vec<u8>>,
    pub surrendered_by: Option<UserId>,
}

impl GamePatch {
    pub fn status(status: GameStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn history(history: Vec<u8>) -> Self {
        Self {
            history: Some(history),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_surrendered_by(mut self, user: UserId) -> Self {
        self.surrendered_by = Some(user);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.history.is_none() && self.surrendered_by.is_none()
    }

    pub(crate) fn apply_to(self, record: &mut GameRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(history) = self.history {
            record.history = Some(history);
        }
        if let Some(user) = self.surrendered_by {
            record.surrendered_by = Some(user);
        }
    }
}
