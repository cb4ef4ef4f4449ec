//! Lobby and match orchestration on top of a [`GameRepository`].
//!
//! Nothing here keeps game state in memory between calls. Every mutation
//! loads the rows, replays the stored history through the rules, and writes
//! the result back while holding that game's lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skirmish_content::Catalog;
use skirmish_core::{
    CatalogOracle, CharacterId, GameEngine, GameEvent, GameSetup, GameState, GameStatus,
    LobbyEvent, PlayerSetup, decode_history, default_atb_timeline, encode_history, is_finished,
    replay, winner,
};
use tokio::sync::mpsc;

use crate::api::{ActionRequest, GameDetail, Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::permissions::{self, GameSubject, Verb};
use crate::repository::{GameId, GamePatch, GamePlayerRecord, GameRecord, GameRepository, UserId};
use crate::scheduler::{ScheduledTask, Scheduler};

type GameLock = Arc<Mutex<()>>;

pub struct GameService {
    repository: Arc<dyn GameRepository>,
    scheduler: Arc<dyn Scheduler>,
    catalog: Catalog,
    config: RuntimeConfig,
    seeds: Mutex<StdRng>,
    locks: Mutex<HashMap<GameId, GameLock>>,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepository>,
        scheduler: Arc<dyn Scheduler>,
        catalog: Catalog,
        config: RuntimeConfig,
    ) -> Self {
        Self {
            repository,
            scheduler,
            catalog,
            config,
            seeds: Mutex::new(StdRng::from_entropy()),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Draw ATB seeds from a fixed RNG seed instead of entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== player operations =====

    /// Open a new game with `user` in the first seat.
    pub fn create(&self, user: &UserId, general_id: CharacterId) -> Result<GameId> {
        if !permissions::can_create(self.current_game(user)?.as_ref()) {
            return Err(RuntimeError::forbidden(Verb::Create, None));
        }
        self.ensure_general(&general_id)?;

        let game_id = self.repository.insert_game(
            user.clone(),
            GameStatus::WaitingForOpponent,
            self.config.game_config.clone(),
        )?;
        self.repository
            .insert_player(game_id, user.clone(), general_id, self.draw_seed())?;

        tracing::info!(%game_id, %user, "game created");
        Ok(game_id)
    }

    /// Delete a game nobody has joined yet.
    pub fn cancel(&self, user: &UserId, game_id: GameId) -> Result<()> {
        self.with_game_lock(game_id, || {
            let (game, players) = self.load(game_id)?;
            self.authorize(user, Verb::Cancel, &game, &players)?;
            self.delete_rows(game_id, &players)?;
            tracing::info!(%game_id, %user, "game cancelled");
            Ok(())
        })
    }

    /// Take the second seat and start the creator's confirmation timer.
    pub fn join(&self, user: &UserId, game_id: GameId, general_id: CharacterId) -> Result<()> {
        self.ensure_general(&general_id)?;
        self.with_game_lock(game_id, || {
            let (game, players) = self.load(game_id)?;
            self.authorize(user, Verb::Join, &game, &players)?;

            let status = game.status.transition(LobbyEvent::Join)?;
            self.repository
                .insert_player(game_id, user.clone(), general_id, self.draw_seed())?;
            self.repository
                .patch_game(game_id, GamePatch::status(status))?;

            self.scheduler.run_after(
                self.config.join_confirmation_timeout,
                ScheduledTask::Decline(game_id),
            );
            tracing::info!(%game_id, %user, "opponent joined");
            Ok(())
        })
    }

    pub fn confirm(&self, user: &UserId, game_id: GameId) -> Result<()> {
        self.with_game_lock(game_id, || {
            let (game, players) = self.load(game_id)?;
            self.authorize(user, Verb::Confirm, &game, &players)?;

            let status = game.status.transition(LobbyEvent::Confirm)?;
            self.repository
                .patch_game(game_id, GamePatch::status(status))?;
            tracing::info!(%game_id, "match started");
            Ok(())
        })
    }

    /// Submit an action on behalf of `user` and return the events it
    /// produced. A rejected action is not an error: it yields no events and
    /// leaves the stored game unchanged.
    pub fn act_on(
        &self,
        user: &UserId,
        game_id: GameId,
        request: ActionRequest,
    ) -> Result<Vec<GameEvent>> {
        self.with_game_lock(game_id, || {
            let (game, players) = self.load(game_id)?;
            self.authorize(user, Verb::ActOn, &game, &players)?;

            let mut state = self.rebuild(&game, &players)?;
            let action = request.into_action(user.clone());
            let events = GameEngine::new(&mut state).dispatch(&action).to_vec();
            if events.is_empty() {
                return Ok(events);
            }

            let mut patch = GamePatch::history(encode_history(state.history())?);
            if is_finished(&state) {
                patch = patch.with_status(game.status.transition(LobbyEvent::Finish)?);
                tracing::info!(%game_id, winner = ?winner(&state), "match finished");
            }
            self.repository.patch_game(game_id, patch)?;

            tracing::debug!(%game_id, %user, kind = action.kind(), events = events.len(), "action applied");
            Ok(events)
        })
    }

    pub fn surrender(&self, user: &UserId, game_id: GameId) -> Result<()> {
        self.with_game_lock(game_id, || {
            let (game, players) = self.load(game_id)?;
            self.authorize(user, Verb::Surrender, &game, &players)?;

            let status = game.status.transition(LobbyEvent::Surrender)?;
            let patch = GamePatch::status(status).with_surrendered_by(user.clone());
            self.repository.patch_game(game_id, patch)?;
            tracing::info!(%game_id, %user, "player surrendered");
            Ok(())
        })
    }

    // ===== internal operations =====

    /// Auto-decline a join the creator left unconfirmed. A game that moved
    /// on in the meantime, or no longer exists, is left alone.
    pub fn decline(&self, game_id: GameId) -> Result<()> {
        self.with_game_lock(game_id, || {
            let Some(game) = self.repository.get_game(game_id)? else {
                return Ok(());
            };
            if game.status != GameStatus::WaitingForCreatorConfirmation {
                return Ok(());
            }

            let status = game.status.transition(LobbyEvent::Decline)?;
            self.repository
                .patch_game(game_id, GamePatch::status(status))?;
            self.scheduler
                .run_after(self.config.removal_delay, ScheduledTask::Remove(game_id));
            tracing::info!(%game_id, "join declined");
            Ok(())
        })
    }

    /// Delete a removable game and its seats. Missing games are ignored.
    pub fn remove(&self, game_id: GameId) -> Result<()> {
        self.with_game_lock(game_id, || {
            let Some(game) = self.repository.get_game(game_id)? else {
                return Ok(());
            };
            if !game.status.can_remove() {
                tracing::warn!(%game_id, status = %game.status, "refusing to remove game");
                return Ok(());
            }
            let players = self.repository.players_by_game(game_id)?;
            self.delete_rows(game_id, &players)?;
            tracing::info!(%game_id, "game removed");
            Ok(())
        })
    }

    pub fn run_task(&self, task: ScheduledTask) -> Result<()> {
        match task {
            ScheduledTask::Decline(game_id) => self.decline(game_id),
            ScheduledTask::Remove(game_id) => self.remove(game_id),
        }
    }

    // ===== queries =====

    pub fn detail(&self, game_id: GameId) -> Result<Option<GameDetail>> {
        let Some(game) = self.repository.get_game(game_id)? else {
            return Ok(None);
        };
        let players = self.repository.players_by_game(game_id)?;
        let state = match players.len() {
            2 => Some(self.rebuild(&game, &players)?),
            _ => None,
        };
        let timeline = state.as_ref().map(default_atb_timeline).unwrap_or_default();
        let winner = match_winner(&game, &players, state.as_ref());

        Ok(Some(GameDetail {
            game,
            players,
            state,
            timeline,
            winner,
        }))
    }

    /// Every game that has not ended, oldest first.
    pub fn open_games(&self) -> Result<Vec<GameRecord>> {
        Ok(self
            .repository
            .list_games()?
            .into_iter()
            .filter(|game| game.status != GameStatus::Ended)
            .collect())
    }

    /// The unfinished game `user` is seated in, if any.
    pub fn current_game(&self, user: &UserId) -> Result<Option<GameRecord>> {
        for seat in self.repository.players_by_user(user)? {
            if let Some(game) = self.repository.get_game(seat.game_id)?
                && game.status != GameStatus::Ended
            {
                return Ok(Some(game));
            }
        }
        Ok(None)
    }

    // ===== helpers =====

    fn load(&self, game_id: GameId) -> Result<(GameRecord, Vec<GamePlayerRecord>)> {
        let game = self
            .repository
            .get_game(game_id)?
            .ok_or(RuntimeError::GameNotFound(game_id))?;
        let players = self.repository.players_by_game(game_id)?;
        Ok((game, players))
    }

    fn authorize(
        &self,
        user: &UserId,
        verb: Verb,
        game: &GameRecord,
        players: &[GamePlayerRecord],
    ) -> Result<()> {
        if permissions::can(user, verb, GameSubject { game, players }) {
            Ok(())
        } else {
            tracing::debug!(game_id = %game.id, %user, %verb, status = %game.status, "permission denied");
            Err(RuntimeError::forbidden(verb, Some(game.id)))
        }
    }

    fn ensure_general(&self, general_id: &CharacterId) -> Result<()> {
        match self.catalog.general(general_id) {
            Some(_) => Ok(()),
            None => Err(RuntimeError::UnknownGeneral(general_id.clone())),
        }
    }

    /// Replays the stored history on top of the seats' setup.
    fn rebuild(&self, game: &GameRecord, players: &[GamePlayerRecord]) -> Result<GameState> {
        let [first, second] = players else {
            return Err(RuntimeError::IncompleteRoster {
                game_id: game.id,
                seats: players.len(),
            });
        };
        let seat =
            |p: &GamePlayerRecord| PlayerSetup::new(p.user_id.clone(), p.general_id.clone(), p.atb_seed);
        let setup = GameSetup::new(seat(first), seat(second)).with_config(game.config.clone());

        let history = match &game.history {
            Some(bytes) => decode_history(bytes)?,
            None => Vec::new(),
        };
        Ok(replay(&setup, &self.catalog, history)?)
    }

    fn delete_rows(&self, game_id: GameId, players: &[GamePlayerRecord]) -> Result<()> {
        for player in players {
            self.repository.delete_player(player.id)?;
        }
        self.repository.delete_game(game_id)?;
        Ok(())
    }

    fn draw_seed(&self) -> u64 {
        match self.seeds.lock() {
            Ok(mut rng) => rng.r#gen(),
            Err(poisoned) => poisoned.into_inner().r#gen(),
        }
    }

    fn with_game_lock<T>(&self, game_id: GameId, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self.lock_for(game_id);
        let result = {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            f()
        };
        self.release_lock(game_id, lock);
        result
    }

    fn lock_for(&self, game_id: GameId) -> GameLock {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(game_id).or_default())
    }

    /// Drops the map entry once nobody else holds or waits on it, so the
    /// map only tracks games with a call in flight.
    fn release_lock(&self, game_id: GameId, lock: GameLock) {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let idle = locks
            .get(&game_id)
            .is_some_and(|tracked| Arc::ptr_eq(tracked, &lock))
            && Arc::strong_count(&lock) == 2;
        if idle {
            locks.remove(&game_id);
        }
    }

    #[cfg(test)]
    fn tracked_locks(&self) -> usize {
        self.locks.lock().map(|locks| locks.len()).unwrap_or(0)
    }
}

/// The opponent of whoever conceded, otherwise the only side with living
/// entities left.
fn match_winner(
    game: &GameRecord,
    players: &[GamePlayerRecord],
    state: Option<&GameState>,
) -> Option<UserId> {
    if let Some(loser) = &game.surrendered_by {
        return players
            .iter()
            .map(|seat| &seat.user_id)
            .find(|user| *user != loser)
            .cloned();
    }
    state.and_then(winner).cloned()
}

/// Feed due tasks from a [`TokioScheduler`](crate::TokioScheduler) into
/// `service` until the channel closes.
pub async fn run_scheduled_tasks(
    service: Arc<GameService>,
    mut tasks: mpsc::UnboundedReceiver<ScheduledTask>,
) {
    while let Some(task) = tasks.recv().await {
        if let Err(error) = service.run_task(task) {
            tracing::warn!(?task, %error, "scheduled task failed");
        }
    }
}
