//! Rebuilding and stepping through state from an event history.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::env::CatalogOracle;
use crate::event::GameEvent;
use crate::state::{EntityId, GameSetup, GameState, SetupError, create_game_state};

/// Folds `history` over the initial state described by `setup`.
pub fn replay<C>(
    setup: &GameSetup,
    catalog: &C,
    history: impl IntoIterator<Item = GameEvent>,
) -> Result<GameState, SetupError>
where
    C: CatalogOracle + ?Sized,
{
    let mut state = create_game_state(setup, catalog)?;
    let mut engine = GameEngine::new(&mut state);
    for event in history {
        engine.apply(event);
    }
    Ok(state)
}

/// Upcoming turn order: the current active entity followed by the next
/// `turns` entities the scheduler would pick if every turn ended at once.
///
/// Works on a copy; `state` is untouched.
pub fn atb_timeline(state: &GameState, turns: usize) -> Vec<EntityId> {
    let mut preview = state.clone();
    let mut timeline = Vec::with_capacity(turns + 1);
    let Some(first) = preview.active_entity_id() else {
        return timeline;
    };
    timeline.push(first);

    let mut engine = GameEngine::new(&mut preview);
    for _ in 0..turns {
        let Some(active) = engine.active_entity_id() else {
            break;
        };
        engine.apply(GameEvent::EndTurn { entity_id: active });
        match engine.active_entity_id() {
            Some(next) => timeline.push(next),
            None => break,
        }
    }
    timeline
}

/// [`atb_timeline`] with the default preview length.
pub fn default_atb_timeline(state: &GameState) -> Vec<EntityId> {
    atb_timeline(state, GameConfig::TIMELINE_PREVIEW_TURNS)
}

/// Applies a batch of new events to a private copy of state one at a time,
/// so a presentation layer can animate between steps.
#[derive(Clone, Debug)]
pub struct Sequencer {
    state: GameState,
    pending: VecDeque<GameEvent>,
}

impl Sequencer {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
        }
    }

    /// Queues events to be applied after the ones already pending.
    pub fn enqueue(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        self.pending.extend(events);
    }

    /// Applies the next pending event and returns it, or `None` when idle.
    pub fn step(&mut self) -> Option<&GameEvent> {
        let event = self.pending.pop_front()?;
        GameEngine::new(&mut self.state).apply(event);
        self.state.history.last()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
