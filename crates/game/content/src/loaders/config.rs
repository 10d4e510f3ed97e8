//! World settings loader.

use std::path::Path;

use game_core::PlayerConfig;

use crate::loaders::{LoadResult, read_file};

/// Session-wide tuning loaded from a TOML file.
#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Fixed simulation step in seconds.
    pub fixed_dt: f32,
    pub player: PlayerConfig,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            player: PlayerConfig::default(),
        }
    }
}

/// Loader for world settings from TOML files.
pub struct WorldSettingsLoader;

impl WorldSettingsLoader {
    pub fn load(path: &Path) -> LoadResult<WorldSettings> {
        let content = read_file(path)?;
        let settings: WorldSettings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world settings {}: {}", path.display(), e))?;
        if settings.fixed_dt <= 0.0 {
            anyhow::bail!("fixed_dt must be positive, got {}", settings.fixed_dt);
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_and_load(body: &str) -> LoadResult<WorldSettings> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.toml");
        std::fs::write(&path, body).unwrap();
        WorldSettingsLoader::load(&path)
    }

    #[test]
    fn partial_files_fall_back_to_defaults() {
        let settings = write_and_load(
            r#"
            fixed_dt = 0.02

            [player]
            max_health = 100.0
            move_speed = 4.0
            sprint_speed = 12.0
            crouch_speed = 2.0
            acceleration = 5.0
            deceleration = 10.0
            rotation_speed = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.fixed_dt, 0.02);
        assert_eq!(settings.player.move_speed, 4.0);

        let defaults = write_and_load("").unwrap();
        assert_eq!(defaults, WorldSettings::default());
    }

    #[test]
    fn rejects_non_positive_step() {
        assert!(write_and_load("fixed_dt = 0.0").is_err());
    }
}
