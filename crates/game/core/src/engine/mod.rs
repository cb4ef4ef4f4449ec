//! Event application and action dispatch.
//!
//! The [`GameEngine`] is the single mutation entry point for [`GameState`].
//! Actions are validated against the current state, then their events are
//! applied one at a time through the reducer, each seeing the state left by
//! the previous one.

mod reducer;
pub(crate) mod turns;

pub use turns::TurnError;

use crate::action::{Action, ActionError, ActionTransition};
use crate::event::GameEvent;
use crate::state::GameState;

/// Game engine wrapping exclusive access to one [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Applies one event and appends it to the history.
    pub fn apply(&mut self, event: GameEvent) {
        reducer::reduce(self.state, event);
    }

    /// Validates and executes an action, returning the events it appended.
    pub fn try_dispatch(&mut self, action: &Action) -> Result<&[GameEvent], ActionError> {
        let start = self.state.history.len();
        match action {
            Action::Move(action) => self.run(action)?,
            Action::Summon(action) => self.run(action)?,
            Action::UseSkill(action) => self.run(action)?,
            Action::EndTurn(action) => self.run(action)?,
        }
        Ok(&self.state.history[start..])
    }

    /// Executes an action, treating a rejection as a silent no-op.
    ///
    /// Returns the appended events; the slice is empty when the action was
    /// rejected and the state is unchanged.
    pub fn dispatch(&mut self, action: &Action) -> &[GameEvent] {
        let start = self.state.history.len();
        if let Err(error) = self.try_dispatch(action) {
            tracing::debug!(
                kind = action.kind(),
                player = %action.player(),
                code = crate::GameError::error_code(&error),
                %error,
                "action rejected"
            );
        }
        &self.state.history[start..]
    }

    fn run<T>(&mut self, action: &T) -> Result<(), T::Error>
    where
        T: ActionTransition,
    {
        let plan = action.pre_validate(self.state)?;
        action.apply(plan, self);
        Ok(())
    }
}
