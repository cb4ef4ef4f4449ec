//! Error types raised by repository implementations.

use thiserror::Error;

use super::{GameId, PlayerRecordId};

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("game repository lock was poisoned")]
    LockPoisoned,

    #[error("game {0} does not exist")]
    GameNotFound(GameId),

    #[error("player row {0} does not exist")]
    PlayerNotFound(PlayerRecordId),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
