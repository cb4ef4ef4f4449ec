//! Data-driven content definitions and loaders.
//!
//! This crate houses the static skirmish content and provides loaders for
//! RON/TOML data files:
//! - Built-in factions, generals, soldiers and skills ([`standard`])
//! - Character catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed through [`skirmish_core::CatalogOracle`] and never
//! appears in game state beyond the blueprints copied into entities.

pub mod catalog;
pub mod standard;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
