use crate::env::TargetType;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CharacterId, EntityId, PlayerId, Position, SkillId};

/// Reasons an action is refused by the capability checks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the game is already finished")]
    GameFinished,

    #[error("no entity is taking a turn")]
    NoActiveEntity,

    #[error("player {player} does not own the active entity {active}")]
    NotYourTurn { player: PlayerId, active: EntityId },

    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("entity {0} is dead")]
    EntityDead(EntityId),

    #[error("entity {entity} is not the active entity")]
    NotActive { entity: EntityId },

    #[error("entity {0} is not a general")]
    NotAGeneral(EntityId),

    #[error("`{0}` cannot be summoned by this general")]
    UnknownSummon(CharacterId),

    #[error("summon costs {required} but only {available} budget is left")]
    InsufficientSummonBudget { required: u32, available: u32 },

    #[error("cell {0} is outside the map")]
    OutOfBounds(Position),

    #[error("cell {0} is not walkable")]
    NotWalkable(Position),

    #[error("cell {position} is occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    #[error("cell {position} is farther than {range} from the general")]
    OutOfSummonRange { position: Position, range: u32 },

    #[error("skill `{0}` is not known by the caster")]
    UnknownSkill(SkillId),

    #[error("action costs {required} AP but only {available} is left")]
    InsufficientAp { required: u32, available: u32 },

    #[error("target at distance {distance} is outside range {min_range}..={range}")]
    OutOfRange {
        distance: u32,
        min_range: u32,
        range: u32,
    },

    #[error("target {0} is not on the caster's row or column")]
    NotAligned(Position),

    #[error("cell {position} is not a valid {expected} target")]
    InvalidTarget {
        position: Position,
        expected: TargetType,
    },

    #[error("no path to {0}")]
    NoPath(Position),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            // The board may change and make these legal later in the turn
            Occupied { .. }
            | NoPath(_)
            | InsufficientAp { .. }
            | InsufficientSummonBudget { .. }
            | OutOfRange { .. }
            | OutOfSummonRange { .. }
            | NotAligned(_)
            | InvalidTarget { .. } => ErrorSeverity::Recoverable,

            GameFinished
            | NotYourTurn { .. }
            | NotActive { .. }
            | EntityDead(_)
            | NotAGeneral(_)
            | UnknownSummon(_)
            | UnknownSkill(_)
            | OutOfBounds(_)
            | NotWalkable(_) => ErrorSeverity::Validation,

            NoActiveEntity | EntityNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            GameFinished => "ACTION_GAME_FINISHED",
            NoActiveEntity => "ACTION_NO_ACTIVE_ENTITY",
            NotYourTurn { .. } => "ACTION_NOT_YOUR_TURN",
            EntityNotFound(_) => "ACTION_ENTITY_NOT_FOUND",
            EntityDead(_) => "ACTION_ENTITY_DEAD",
            NotActive { .. } => "ACTION_NOT_ACTIVE",
            NotAGeneral(_) => "ACTION_NOT_A_GENERAL",
            UnknownSummon(_) => "ACTION_UNKNOWN_SUMMON",
            InsufficientSummonBudget { .. } => "ACTION_INSUFFICIENT_SUMMON_BUDGET",
            OutOfBounds(_) => "ACTION_OUT_OF_BOUNDS",
            NotWalkable(_) => "ACTION_NOT_WALKABLE",
            Occupied { .. } => "ACTION_OCCUPIED",
            OutOfSummonRange { .. } => "ACTION_OUT_OF_SUMMON_RANGE",
            UnknownSkill(_) => "ACTION_UNKNOWN_SKILL",
            InsufficientAp { .. } => "ACTION_INSUFFICIENT_AP",
            OutOfRange { .. } => "ACTION_OUT_OF_RANGE",
            NotAligned(_) => "ACTION_NOT_ALIGNED",
            InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            NoPath(_) => "ACTION_NO_PATH",
        }
    }
}
