//! Repository layer for lobby and match records.
//!
//! Games are stored as documents: a game row holding the lobby status and the
//! encoded event history, and one player row per seat. The game state itself
//! is never stored; it is rebuilt from the history on demand.
//!
//! Static content (generals, soldiers, skills) comes from the catalog, not
//! from repositories.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryGameRepository;
pub use traits::GameRepository;
pub use types::{GameId, GamePatch, GamePlayerRecord, GameRecord, PlayerRecordId, UserId};
