//! Repository contract for lobby and match documents.

use skirmish_core::{CharacterId, GameConfig, GameStatus};

use super::{GameId, GamePatch, GamePlayerRecord, GameRecord, PlayerRecordId, Result, UserId};

/// Document store holding games and their player rows.
///
/// Implementations assign ids in insertion order, so the player rows of a
/// game come back creator first.
pub trait GameRepository: Send + Sync {
    /// Insert a new game row with an empty history.
    fn insert_game(&self, creator: UserId, status: GameStatus, config: GameConfig)
    -> Result<GameId>;

    fn get_game(&self, id: GameId) -> Result<Option<GameRecord>>;

    /// Apply a partial update. Fails with `GameNotFound` for a missing row.
    fn patch_game(&self, id: GameId, patch: GamePatch) -> Result<()>;

    /// Delete a game row. Deleting a missing row is not an error.
    fn delete_game(&self, id: GameId) -> Result<()>;

    fn insert_player(
        &self,
        game_id: GameId,
        user_id: UserId,
        general_id: CharacterId,
        atb_seed: u64,
    ) -> Result<PlayerRecordId>;

    fn delete_player(&self, id: PlayerRecordId) -> Result<()>;

    /// Player rows of a game in insertion order.
    fn players_by_game(&self, game_id: GameId) -> Result<Vec<GamePlayerRecord>>;

    /// Player rows of a user across all games, oldest first.
    fn players_by_user(&self, user_id: &UserId) -> Result<Vec<GamePlayerRecord>>;

    /// Every game row, oldest first.
    fn list_games(&self) -> Result<Vec<GameRecord>>;
}
