pub mod common;
pub mod entities;
pub mod map;
pub mod turn;

pub use common::{CharacterId, EntityId, FactionId, PlayerId, Position, SkillId};
pub use entities::{EntitiesState, Entity, EntityKind, GeneralState};
pub use map::{CellView, GameMap, TerrainKind};
pub use turn::TurnState;
