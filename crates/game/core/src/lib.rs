//! Deterministic, event-sourced skirmish rules shared by server and client.
//!
//! `skirmish-core` defines the canonical rules (state, events, actions, turn
//! order) and exposes pure APIs with no I/O. All state mutation flows through
//! [`engine::GameEngine`]: actions are checked by [`ability`], turned into
//! [`GameEvent`]s, and each event is reduced into [`GameState`] and appended
//! to its history. Folding the same history over the same [`GameSetup`]
//! always yields the same state.
pub mod ability;
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod pathfinding;
pub mod state;

#[cfg(feature = "serde")]
pub mod codec;
pub mod replay;

#[cfg(test)]
mod test_support;

pub use ability::CellFlags;
pub use action::{
    Action, ActionError, ActionTransition, EndTurnAction, MoveAction, SummonAction,
    UseSkillAction,
};
#[cfg(feature = "serde")]
pub use codec::{
    CodecError, decode_history, decode_state, encode_history, encode_state, state_root,
};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnError};
pub use env::{
    Aura, AuraStat, Blueprint, BlueprintBuilder, CatalogOracle, SkillData, SkillEffect,
    TargetType, TargetZone, Trigger, TriggerEffect, TriggerEvent,
};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use lifecycle::{GameStatus, LifecycleError, LobbyEvent, is_finished, winner};
pub use pathfinding::PathFinder;
pub use replay::{Sequencer, atb_timeline, default_atb_timeline, replay};
pub use state::{
    CellView, CharacterId, EntitiesState, Entity, EntityId, EntityKind, FactionId, GameMap,
    GameSetup, GameState, GeneralState, PlayerId, PlayerSetup, PlayerSlot, Position, SetupError,
    SkillId, TerrainKind, TurnState, create_game_state,
};
