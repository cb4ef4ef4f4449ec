//! Initial state construction from the immutable game setup.

use super::{Entity, EntityId, EntityKind, GameState, GeneralState, PlayerSlot, SetupError};
use crate::config::GameConfig;
use crate::engine::turns;
use crate::env::CatalogOracle;
use crate::state::{CharacterId, PlayerId};

/// One seat of the game: who plays, which general, and the drawn ATB seed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSetup {
    pub id: PlayerId,
    pub character_id: CharacterId,
    pub atb_seed: u64,
}

impl PlayerSetup {
    pub fn new(id: impl Into<PlayerId>, character_id: impl Into<CharacterId>, atb_seed: u64) -> Self {
        Self {
            id: id.into(),
            character_id: character_id.into(),
            atb_seed,
        }
    }
}

/// Everything needed to rebuild a game from scratch. Persisted next to the
/// history; replaying the history on top of it yields the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSetup {
    pub players: [PlayerSetup; 2],
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: GameConfig,
}

impl GameSetup {
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Self {
        Self {
            players: [first, second],
            config: GameConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
}

/// Builds the starting state: both generals on their mirrored edge cells and
/// the first active entity chosen by the ATB scheduler.
pub fn create_game_state<C>(setup: &GameSetup, catalog: &C) -> Result<GameState, SetupError>
where
    C: CatalogOracle + ?Sized,
{
    let [first, second] = &setup.players;
    if first.id == second.id {
        return Err(SetupError::DuplicatePlayer {
            player: first.id.clone(),
        });
    }

    let config = &setup.config;
    let positions = config.general_positions();
    if positions[0].x >= positions[1].x {
        return Err(SetupError::MapTooSmall {
            width: config.map_width,
            height: config.map_height,
        });
    }

    let slots = setup.players.clone().map(|player| PlayerSlot {
        id: player.id,
        atb_seed: player.atb_seed,
    });
    let mut state = GameState::new(slots, config.clone());

    for (player, position) in setup.players.iter().zip(positions) {
        if !state.map.is_walkable(position) {
            return Err(SetupError::BlockedStart {
                player: player.id.clone(),
                position,
            });
        }

        let blueprint =
            catalog
                .general(&player.character_id)
                .ok_or_else(|| SetupError::UnknownGeneral {
                    player: player.id.clone(),
                    character_id: player.character_id.clone(),
                })?;
        let general = GeneralState::new(blueprint.summon_budget, catalog.summons(&blueprint.faction));

        let id = EntityId(state.next_entity_id);
        state.entities.push(Entity::new(
            id,
            player.id.clone(),
            position,
            blueprint,
            EntityKind::General(general),
        ));
        state.next_entity_id += 1;
    }

    if let Err(error) = turns::tick_until_active_entity(&mut state) {
        tracing::warn!(%error, "no entity can take the first turn");
    }

    Ok(state)
}
