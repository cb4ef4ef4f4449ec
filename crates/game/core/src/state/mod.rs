//! Authoritative game state representation.
//!
//! This module owns the data structures that describe players, entities, the
//! map, turn bookkeeping and the event history. Callers clone or query this
//! state but mutate it exclusively through [`GameEngine`](crate::GameEngine).
mod error;
mod setup;
pub mod types;

pub use error::SetupError;
pub use setup::{GameSetup, PlayerSetup, create_game_state};
pub use types::{
    CellView, CharacterId, EntitiesState, Entity, EntityId, EntityKind, FactionId, GameMap,
    GeneralState, PlayerId, Position, SkillId, TerrainKind, TurnState,
};

use crate::config::GameConfig;
use crate::event::GameEvent;

/// A participating player and the turn-order seed drawn for them at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSlot {
    pub id: PlayerId,
    /// Breaks ATB ties in favour of the higher seed.
    pub atb_seed: u64,
}

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Ordered pair of participants; order is fixed for the whole game.
    pub(crate) players: [PlayerSlot; 2],

    /// Configuration captured at creation.
    pub(crate) config: GameConfig,

    /// Id handed to the next summoned entity. Always equals the arena length.
    pub(crate) next_entity_id: u32,

    pub(crate) turn: TurnState,
    pub(crate) map: GameMap,
    pub(crate) entities: EntitiesState,

    /// Append-only log of every event applied to this state.
    pub(crate) history: Vec<GameEvent>,
}

impl GameState {
    pub(crate) fn new(players: [PlayerSlot; 2], config: GameConfig) -> Self {
        let map = GameMap::from_config(&config);
        Self {
            players,
            config,
            next_entity_id: 0,
            turn: TurnState::new(),
            map,
            entities: EntitiesState::new(),
            history: Vec::new(),
        }
    }

    pub fn players(&self) -> &[PlayerSlot; 2] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerSlot> {
        self.players.iter().find(|slot| &slot.id == id)
    }

    /// The other participant, if `id` takes part in this game.
    pub fn opponent_of(&self, id: &PlayerId) -> Option<&PlayerSlot> {
        match &self.players {
            [first, second] if &first.id == id => Some(second),
            [first, second] if &second.id == id => Some(first),
            _ => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Id the next summoned entity will receive.
    pub fn next_entity_id(&self) -> EntityId {
        EntityId(self.next_entity_id)
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn entities(&self) -> &EntitiesState {
        &self.entities
    }

    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    pub fn active_entity_id(&self) -> Option<EntityId> {
        self.turn.active_entity_id
    }

    pub fn active_entity(&self) -> Option<&Entity> {
        self.turn
            .active_entity_id
            .and_then(|id| self.entities.get(id))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// The living entity standing on `position`, if any.
    pub fn entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities.at(position)
    }

    /// Merged terrain and occupancy for an in-bounds cell.
    pub fn cell_view(&self, position: Position) -> Option<CellView> {
        let terrain = self.map.terrain(position)?;
        Some(CellView {
            position,
            terrain,
            occupant: self.entities.at(position).map(|entity| entity.id),
        })
    }

    /// Whether a cell is in bounds, walkable and free of living entities.
    pub fn is_cell_empty(&self, position: Position) -> bool {
        self.cell_view(position)
            .map(|view| view.is_empty())
            .unwrap_or(false)
    }

    pub(crate) fn seed_of(&self, owner: &PlayerId) -> u64 {
        self.player(owner).map(|slot| slot.atb_seed).unwrap_or(0)
    }
}
