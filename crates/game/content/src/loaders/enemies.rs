//! Enemy archetype catalog loader.
//!
//! Loads named [`EnemyConfig`] archetypes from RON files. Spawners look
//! archetypes up by name when instantiating enemies.

use std::collections::HashMap;
use std::path::Path;

use game_core::EnemyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for the enemy archetype catalog from RON files.
///
/// RON format: `Vec<(String, EnemyConfig)>`. Archetype names must be unique.
pub struct EnemyCatalogLoader;

impl EnemyCatalogLoader {
    pub fn load(path: &Path) -> LoadResult<HashMap<String, EnemyConfig>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog {}: {}", path.display(), e))
    }

    fn parse(content: &str) -> LoadResult<HashMap<String, EnemyConfig>> {
        let raw: Vec<(String, EnemyConfig)> = ron::from_str(content)?;

        let mut catalog = HashMap::with_capacity(raw.len());
        for (name, config) in raw {
            if catalog.insert(name.clone(), config).is_some() {
                anyhow::bail!("duplicate enemy archetype '{name}'");
            }
        }
        Ok(catalog)
    }
}
