//! In-memory GameRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use skirmish_core::{CharacterId, GameConfig, GameStatus};

use crate::repository::{
    GameId, GamePatch, GamePlayerRecord, GameRecord, GameRepository, PlayerRecordId,
    RepositoryError, Result, UserId,
};

#[derive(Debug, Default)]
struct Tables {
    games: BTreeMap<GameId, GameRecord>,
    players: BTreeMap<PlayerRecordId, GamePlayerRecord>,
    next_game_id: u64,
    next_player_id: u64,
}

/// In-memory implementation of [`GameRepository`].
///
/// Rows live in ordered maps keyed by monotonically increasing ids, which
/// keeps every listing in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    tables: RwLock<Tables>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_count(&self) -> usize {
        self.tables
            .read()
            .map(|tables| tables.games.len())
            .unwrap_or(0)
    }

    pub fn player_count(&self) -> usize {
        self.tables
            .read()
            .map(|tables| tables.players.len())
            .unwrap_or(0)
    }
}

impl GameRepository for InMemoryGameRepository {
    fn insert_game(
        &self,
        creator: UserId,
        status: GameStatus,
        config: GameConfig,
    ) -> Result<GameId> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let id = GameId(tables.next_game_id);
        tables.next_game_id += 1;
        tables.games.insert(
            id,
            GameRecord {
                id,
                creator,
                status,
                config,
                history: None,
                surrendered_by: None,
            },
        );
        Ok(id)
    }

    fn get_game(&self, id: GameId) -> Result<Option<GameRecord>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.games.get(&id).cloned())
    }

    fn patch_game(&self, id: GameId, patch: GamePatch) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let record = tables
            .games
            .get_mut(&id)
            .ok_or(RepositoryError::GameNotFound(id))?;
        patch.apply_to(record);
        Ok(())
    }

    fn delete_game(&self, id: GameId) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        tables.games.remove(&id);
        Ok(())
    }

    fn insert_player(
        &self,
        game_id: GameId,
        user_id: UserId,
        general_id: CharacterId,
        atb_seed: u64,
    ) -> Result<PlayerRecordId> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if !tables.games.contains_key(&game_id) {
            return Err(RepositoryError::GameNotFound(game_id));
        }
        let id = PlayerRecordId(tables.next_player_id);
        tables.next_player_id += 1;
        tables.players.insert(
            id,
            GamePlayerRecord {
                id,
                game_id,
                user_id,
                general_id,
                atb_seed,
            },
        );
        Ok(id)
    }

    fn delete_player(&self, id: PlayerRecordId) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        tables
            .players
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::PlayerNotFound(id))
    }

    fn players_by_game(&self, game_id: GameId) -> Result<Vec<GamePlayerRecord>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables
            .players
            .values()
            .filter(|player| player.game_id == game_id)
            .cloned()
            .collect())
    }

    fn players_by_user(&self, user_id: &UserId) -> Result<Vec<GamePlayerRecord>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables
            .players
            .values()
            .filter(|player| &player.user_id == user_id)
            .cloned()
            .collect())
    }

    fn list_games(&self) -> Result<Vec<GameRecord>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(tables.games.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_come_back_in_insertion_order() {
        let repo = InMemoryGameRepository::new();
        let game = repo
            .insert_game("alice".into(), GameStatus::WaitingForOpponent, GameConfig::default())
            .unwrap();
        repo.insert_player(game, "alice".into(), "necromancer".into(), 7)
            .unwrap();
        repo.insert_player(game, "bob".into(), "haven_commander".into(), 3)
            .unwrap();

        let players = repo.players_by_game(game).unwrap();
        let users: Vec<_> = players.iter().map(|p| p.user_id.as_str()).collect();
        assert_eq!(users, ["alice", "bob"]);
        assert_eq!(repo.players_by_user(&"bob".into()).unwrap().len(), 1);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let repo = InMemoryGameRepository::new();
        let game = repo
            .insert_game("alice".into(), GameStatus::WaitingForOpponent, GameConfig::default())
            .unwrap();

        repo.patch_game(game, GamePatch::history(vec![1, 2, 3]))
            .unwrap();
        repo.patch_game(game, GamePatch::status(GameStatus::Ongoing))
            .unwrap();

        let record = repo.get_game(game).unwrap().unwrap();
        assert_eq!(record.status, GameStatus::Ongoing);
        assert_eq!(record.history, Some(vec![1, 2, 3]));
    }

    #[test]
    fn missing_rows_are_reported() {
        let repo = InMemoryGameRepository::new();
        assert!(matches!(
            repo.patch_game(GameId(9), GamePatch::status(GameStatus::Ended)),
            Err(RepositoryError::GameNotFound(GameId(9)))
        ));
        assert!(matches!(
            repo.insert_player(GameId(9), "alice".into(), "necromancer".into(), 0),
            Err(RepositoryError::GameNotFound(_))
        ));
        assert!(repo.delete_game(GameId(9)).is_ok());
        assert_eq!(repo.get_game(GameId(9)).unwrap(), None);
    }
}
