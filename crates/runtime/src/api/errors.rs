//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the rules, the codec and the repository so callers can
//! bubble them up with consistent context.
use skirmish_core::{CharacterId, CodecError, ErrorSeverity, GameError, LifecycleError, SetupError};
use thiserror::Error;

pub use crate::repository::RepositoryError;
use crate::permissions::Verb;
use crate::repository::GameId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} not found")]
    GameNotFound(GameId),

    #[error("not allowed to {verb} {game}")]
    Forbidden { verb: Verb, game: String },

    #[error("unknown general '{0}'")]
    UnknownGeneral(CharacterId),

    #[error("{game_id} has {seats} seat(s), a match needs 2")]
    IncompleteRoster { game_id: GameId, seats: usize },

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error("failed to rebuild game state")]
    Setup(#[from] SetupError),

    #[error("stored history is unreadable")]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    pub(crate) fn forbidden(verb: Verb, game: Option<GameId>) -> Self {
        RuntimeError::Forbidden {
            verb,
            game: game.map_or_else(|| "a new game".to_owned(), |id| id.to_string()),
        }
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::GameNotFound(_)
            | RuntimeError::Forbidden { .. }
            | RuntimeError::UnknownGeneral(_)
            | RuntimeError::Lifecycle(_) => ErrorSeverity::Validation,
            RuntimeError::IncompleteRoster { .. } | RuntimeError::Setup(_) => {
                ErrorSeverity::Internal
            }
            RuntimeError::Codec(error) => error.severity(),
            RuntimeError::Repository(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::GameNotFound(_) => "RUNTIME_GAME_NOT_FOUND",
            RuntimeError::Forbidden { .. } => "RUNTIME_FORBIDDEN",
            RuntimeError::UnknownGeneral(_) => "RUNTIME_UNKNOWN_GENERAL",
            RuntimeError::IncompleteRoster { .. } => "RUNTIME_INCOMPLETE_ROSTER",
            RuntimeError::Lifecycle(error) => error.error_code(),
            RuntimeError::Setup(error) => error.error_code(),
            RuntimeError::Codec(error) => error.error_code(),
            RuntimeError::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
