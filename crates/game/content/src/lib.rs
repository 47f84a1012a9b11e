//! Data-driven content definitions and loaders.
//!
//! This crate reads the stable's tunable content from a data directory:
//! - Balance tables (TOML) deserialized straight into [`arena_core::ArenaConfig`]
//! - Name-part lists (RON) feeding [`arena_core::NameGenerator`]
//!
//! Content configures the simulation but never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, NameParts, NamePartsLoader};
