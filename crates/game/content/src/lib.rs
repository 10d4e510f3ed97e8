//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML data files a level ships
//! with:
//! - Enemy archetype catalogs (data-driven via RON)
//! - Patrol route layouts (data-driven via RON)
//! - World and player tuning (data-driven via TOML)
//!
//! Content is consumed once at level load and never appears in live agent
//! state. All loaders deserialize into game-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{EnemyCatalogLoader, RouteLoader, WorldSettings, WorldSettingsLoader};
