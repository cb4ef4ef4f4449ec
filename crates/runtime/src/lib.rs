//! Boundary glue between the deterministic skirmish rules and the outside world.
//!
//! The core crate knows nothing about lobbies, storage or time. This crate
//! supplies them: games live in a document-style [`GameRepository`], every
//! submitted action is applied by replaying the stored history through
//! [`skirmish_core::GameEngine`], and lobby timeouts are driven by a
//! [`Scheduler`].
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts [`GameService`], the lobby and match orchestrator
//! - [`api`] exposes the request/response types and errors clients see
//! - [`permissions`] decides who may do what to which game
//! - [`repository`] and [`scheduler`] are the storage and timer adapters
pub mod api;
pub mod config;
pub mod logging;
pub mod permissions;
pub mod repository;
pub mod scheduler;
pub mod service;

pub use api::{ActionRequest, GameDetail, Result, RuntimeError};
pub use config::RuntimeConfig;
pub use logging::init_tracing;
pub use permissions::Verb;
pub use repository::{
    GameId, GamePatch, GamePlayerRecord, GameRecord, GameRepository, InMemoryGameRepository,
    PlayerRecordId, RepositoryError, UserId,
};
pub use scheduler::{ManualScheduler, ScheduledTask, Scheduler, TokioScheduler};
pub use service::{GameService, run_scheduled_tasks};
