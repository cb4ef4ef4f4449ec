use std::sync::Arc;
use std::time::Duration;

use skirmish_content::Catalog;
use skirmish_content::standard::ids;
use skirmish_core::GameStatus;
use skirmish_runtime::{
    GameRepository, GameService, InMemoryGameRepository, RuntimeConfig, TokioScheduler,
    run_scheduled_tasks,
};

fn spawn_service() -> (Arc<InMemoryGameRepository>, Arc<GameService>) {
    let repo = Arc::new(InMemoryGameRepository::new());
    let (scheduler, tasks) = TokioScheduler::new();
    let service = Arc::new(
        GameService::new(
            repo.clone(),
            Arc::new(scheduler),
            Catalog::standard(),
            RuntimeConfig::default(),
        )
        .with_seed(5),
    );
    tokio::spawn(run_scheduled_tasks(service.clone(), tasks));
    (repo, service)
}

#[tokio::test(start_paused = true)]
async fn unconfirmed_join_times_out_and_is_cleaned_up() {
    let (repo, service) = spawn_service();
    let game = service
        .create(&"alice".into(), ids::NECROMANCER.into())
        .unwrap();
    service
        .join(&"bob".into(), game, ids::HAVEN_COMMANDER.into())
        .unwrap();

    tokio::time::sleep(Duration::from_secs(29)).await;
    let status = repo.get_game(game).unwrap().map(|g| g.status);
    assert_eq!(status, Some(GameStatus::WaitingForCreatorConfirmation));

    tokio::time::sleep(Duration::from_secs(2)).await;
    let status = repo.get_game(game).unwrap().map(|g| g.status);
    assert_eq!(status, Some(GameStatus::DeclinedByCreator));

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(repo.get_game(game).unwrap(), None);
    assert_eq!(repo.player_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn confirmed_game_survives_the_timeout() {
    let (repo, service) = spawn_service();
    let game = service
        .create(&"alice".into(), ids::NECROMANCER.into())
        .unwrap();
    service
        .join(&"bob".into(), game, ids::HAVEN_COMMANDER.into())
        .unwrap();
    service.confirm(&"alice".into(), game).unwrap();

    tokio::time::sleep(Duration::from_secs(60)).await;
    let status = repo.get_game(game).unwrap().map(|g| g.status);
    assert_eq!(status, Some(GameStatus::Ongoing));
}
