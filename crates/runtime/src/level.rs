//! Level assembly from data files.
//!
//! A [`Level`] bundles the content a map ships with (enemy archetype
//! catalog, patrol route layouts, world settings) and resolves spawners
//! from archetype and route names, so hosts place spawn points by name
//! instead of carrying tuning structs around.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::Vec3;

use game_content::{EnemyCatalogLoader, RouteLoader, WorldSettings, WorldSettingsLoader};
use game_core::{EnemyConfig, PatrolRoute};

use crate::error::{Result, RuntimeError};
use crate::spawner::EnemySpawner;

pub struct Level {
    catalog: HashMap<String, EnemyConfig>,
    routes: HashMap<String, Arc<PatrolRoute>>,
    settings: WorldSettings,
}

impl Level {
    /// Load `enemies.ron`, `routes.ron`, and `world.toml` from a level
    /// directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let catalog = EnemyCatalogLoader::load(&dir.join("enemies.ron"))?;
        let routes = RouteLoader::load(&dir.join("routes.ron"))?;
        let settings = WorldSettingsLoader::load(&dir.join("world.toml"))?;
        Ok(Self {
            catalog,
            routes,
            settings,
        })
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    pub fn archetype(&self, name: &str) -> Result<EnemyConfig> {
        self.catalog
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownArchetype(name.to_owned()))
    }

    pub fn route(&self, name: &str) -> Result<Arc<PatrolRoute>> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownRoute(name.to_owned()))
    }

    /// Build a spawner for a named archetype, optionally walking a named
    /// route.
    pub fn spawner(
        &self,
        archetype: &str,
        route: Option<&str>,
        position: Vec3,
        forward: Vec3,
    ) -> Result<EnemySpawner> {
        let config = self.archetype(archetype)?;
        let mut spawner = EnemySpawner::new(config, position, forward);
        if let Some(name) = route {
            spawner = spawner.with_route(self.route(name)?);
        }
        Ok(spawner)
    }
}
