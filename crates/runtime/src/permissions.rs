//! Who may do what to which game.
//!
//! Every public mutation of [`GameService`](crate::GameService) asks these
//! predicates before touching the repository. They only look at records, so
//! they can be unit tested without a service.

use skirmish_core::GameStatus;

use crate::repository::{GamePlayerRecord, GameRecord, UserId};

/// Player-initiated operations on games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Verb {
    Create,
    Cancel,
    Join,
    Confirm,
    ActOn,
    Surrender,
}

/// A game together with its seats, as seen by the permission checks.
#[derive(Clone, Copy, Debug)]
pub struct GameSubject<'a> {
    pub game: &'a GameRecord,
    pub players: &'a [GamePlayerRecord],
}

impl GameSubject<'_> {
    fn is_creator(&self, user: &UserId) -> bool {
        &self.game.creator == user
    }

    fn is_participant(&self, user: &UserId) -> bool {
        self.players.iter().any(|player| &player.user_id == user)
    }
}

/// A user may open a new game only while not seated in an unfinished one.
pub fn can_create(current_game: Option<&GameRecord>) -> bool {
    current_game.is_none_or(|game| game.status == GameStatus::Ended)
}

pub fn can(user: &UserId, verb: Verb, subject: GameSubject<'_>) -> bool {
    let status = subject.game.status;
    match verb {
        Verb::Create => false,
        Verb::Cancel => subject.is_creator(user) && status == GameStatus::WaitingForOpponent,
        Verb::Join => {
            !subject.is_creator(user)
                && !subject.is_participant(user)
                && status == GameStatus::WaitingForOpponent
        }
        Verb::Confirm => {
            subject.is_creator(user) && status == GameStatus::WaitingForCreatorConfirmation
        }
        Verb::ActOn | Verb::Surrender => subject.is_participant(user) && status.accepts_actions(),
    }
}
