use std::sync::Arc;
use std::time::Duration;

use skirmish_content::Catalog;
use skirmish_content::standard::ids;
use skirmish_core::{GameError, GameStatus};
use skirmish_runtime::{
    GameId, GameRepository, GameService, InMemoryGameRepository, ManualScheduler, RuntimeConfig,
    RuntimeError, ScheduledTask, UserId, Verb,
};

struct Harness {
    repo: Arc<InMemoryGameRepository>,
    scheduler: Arc<ManualScheduler>,
    service: GameService,
}

fn harness() -> Harness {
    let repo = Arc::new(InMemoryGameRepository::new());
    let scheduler = Arc::new(ManualScheduler::new());
    let service = GameService::new(
        repo.clone(),
        scheduler.clone(),
        Catalog::standard(),
        RuntimeConfig::default(),
    )
    .with_seed(7);
    Harness {
        repo,
        scheduler,
        service,
    }
}

fn alice() -> UserId {
    "alice".into()
}

fn bob() -> UserId {
    "bob".into()
}

fn status(h: &Harness, game: GameId) -> Option<GameStatus> {
    h.repo.get_game(game).unwrap().map(|record| record.status)
}

#[test]
fn create_join_confirm_starts_the_match() {
    let h = harness();
    let game = h.service.create(&alice(), ids::NECROMANCER.into()).unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::WaitingForOpponent));
    assert_eq!(h.service.open_games().unwrap().len(), 1);

    h.service
        .join(&bob(), game, ids::HAVEN_COMMANDER.into())
        .unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::WaitingForCreatorConfirmation));
    assert_eq!(
        h.scheduler.take(),
        vec![(
            RuntimeConfig::DEFAULT_JOIN_CONFIRMATION_TIMEOUT,
            ScheduledTask::Decline(game)
        )]
    );

    h.service.confirm(&alice(), game).unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::Ongoing));

    // The timer firing after confirmation changes nothing.
    h.service.run_task(ScheduledTask::Decline(game)).unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::Ongoing));
    assert!(h.scheduler.is_empty());

    let detail = h.service.detail(game).unwrap().unwrap();
    assert_eq!(detail.players.len(), 2);
    assert_eq!(detail.players[0].user_id, alice());
    let state = detail.state.unwrap();
    assert!(state.history().is_empty());
    assert_eq!(detail.timeline.first().copied(), state.active_entity_id());
}

#[test]
fn unconfirmed_join_is_declined_then_removed() {
    let h = harness();
    let game = h.service.create(&alice(), ids::NECROMANCER.into()).unwrap();
    h.service
        .join(&bob(), game, ids::HAVEN_COMMANDER.into())
        .unwrap();

    let [(_, decline)] = h.scheduler.take().try_into().unwrap();
    h.service.run_task(decline).unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::DeclinedByCreator));
    assert!(matches!(
        h.service.confirm(&alice(), game),
        Err(RuntimeError::Forbidden { verb: Verb::Confirm, .. })
    ));

    let [(delay, remove)] = h.scheduler.take().try_into().unwrap();
    assert_eq!(delay, Duration::from_secs(5));
    assert_eq!(remove, ScheduledTask::Remove(game));
    h.service.run_task(remove).unwrap();

    assert_eq!(status(&h, game), None);
    assert_eq!(h.repo.game_count(), 0);
    assert_eq!(h.repo.player_count(), 0);
    assert!(h.service.current_game(&alice()).unwrap().is_none());
}

#[test]
fn only_the_creator_may_cancel_a_waiting_game() {
    let h = harness();
    let game = h.service.create(&alice(), ids::NECROMANCER.into()).unwrap();

    let error = h.service.cancel(&bob(), game).unwrap_err();
    assert_eq!(error.error_code(), "RUNTIME_FORBIDDEN");

    h.service.cancel(&alice(), game).unwrap();
    assert_eq!(h.repo.game_count(), 0);
    assert_eq!(h.repo.player_count(), 0);
    assert!(matches!(
        h.service.cancel(&alice(), game),
        Err(RuntimeError::GameNotFound(_))
    ));
}

#[test]
fn players_cannot_sit_in_two_unfinished_games() {
    let h = harness();
    let game = h.service.create(&alice(), ids::NECROMANCER.into()).unwrap();
    assert_eq!(
        h.service.current_game(&alice()).unwrap().map(|g| g.id),
        Some(game)
    );

    assert!(matches!(
        h.service.create(&alice(), ids::HAVEN_COMMANDER.into()),
        Err(RuntimeError::Forbidden { verb: Verb::Create, .. })
    ));
    assert!(matches!(
        h.service.join(&alice(), game, ids::HAVEN_COMMANDER.into()),
        Err(RuntimeError::Forbidden { verb: Verb::Join, .. })
    ));
}

#[test]
fn surrender_ends_the_match_and_frees_both_players() {
    let h = harness();
    let game = h.service.create(&alice(), ids::NECROMANCER.into()).unwrap();
    h.service
        .join(&bob(), game, ids::HAVEN_COMMANDER.into())
        .unwrap();
    h.service.confirm(&alice(), game).unwrap();

    assert!(h.service.surrender(&"carol".into(), game).is_err());
    h.service.surrender(&bob(), game).unwrap();

    assert_eq!(status(&h, game), Some(GameStatus::Ended));
    let detail = h.service.detail(game).unwrap().unwrap();
    assert_eq!(detail.game.surrendered_by, Some(bob()));
    assert_eq!(detail.winner, Some(alice()));
    assert!(h.service.open_games().unwrap().is_empty());
    assert!(h.service.current_game(&bob()).unwrap().is_none());
    assert!(h.service.create(&bob(), ids::NECROMANCER.into()).is_ok());
    // Ended games are kept, not removed.
    h.service.run_task(ScheduledTask::Remove(game)).unwrap();
    assert_eq!(status(&h, game), Some(GameStatus::Ended));
}

#[test]
fn unknown_generals_are_rejected_up_front() {
    let h = harness();
    assert!(matches!(
        h.service.create(&alice(), "dragon".into()),
        Err(RuntimeError::UnknownGeneral(_))
    ));
    // Soldiers are not pickable as generals.
    assert!(matches!(
        h.service.create(&alice(), ids::SKELETON.into()),
        Err(RuntimeError::UnknownGeneral(_))
    ));
    assert_eq!(h.repo.game_count(), 0);
}
