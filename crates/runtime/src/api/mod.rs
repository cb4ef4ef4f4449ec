//! Types exchanged with clients of the runtime.

mod errors;
mod types;

pub use errors::{Result, RuntimeError};
pub use types::{ActionRequest, GameDetail};
