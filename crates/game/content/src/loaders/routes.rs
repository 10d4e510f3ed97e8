//! Patrol route layout loader.
//!
//! Loads named patrol routes from RON files into shared [`PatrolRoute`]
//! values. Routes are wrapped in `Arc` so any number of spawned enemies can
//! walk the same layout with independent cursors.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use game_core::{PatrolRoute, TraversalPolicy, Waypoint};

use crate::loaders::{LoadResult, read_file};

/// On-disk form of one waypoint. Wait time and look-around are optional in
/// the data files.
#[derive(serde::Deserialize)]
struct WaypointSpec {
    position: [f32; 3],
    #[serde(default = "WaypointSpec::default_wait")]
    wait_duration: f32,
    #[serde(default)]
    look_around: bool,
}

impl WaypointSpec {
    fn default_wait() -> f32 {
        2.0
    }
}

/// On-disk form of one route.
#[derive(serde::Deserialize)]
struct RouteSpec {
    #[serde(default)]
    policy: TraversalPolicy,
    waypoints: Vec<WaypointSpec>,
}

/// Loader for patrol route layouts from RON files.
///
/// RON format: `Vec<(String, RouteSpec)>`. Route names must be unique; an
/// empty waypoint list is rejected at load time since such a route can never
/// be walked.
pub struct RouteLoader;

impl RouteLoader {
    pub fn load(path: &Path) -> LoadResult<HashMap<String, Arc<PatrolRoute>>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse route layout {}: {}", path.display(), e))
    }

    fn parse(content: &str) -> LoadResult<HashMap<String, Arc<PatrolRoute>>> {
        let raw: Vec<(String, RouteSpec)> = ron::from_str(content)?;

        let mut routes = HashMap::with_capacity(raw.len());
        for (name, spec) in raw {
            if spec.waypoints.is_empty() {
                anyhow::bail!("route '{name}' has no waypoints");
            }
            let waypoints = spec
                .waypoints
                .into_iter()
                .map(|w| Waypoint {
                    position: w.position.into(),
                    wait_duration: w.wait_duration,
                    look_around: w.look_around,
                })
                .collect();
            let route = Arc::new(PatrolRoute::new(waypoints, spec.policy));
            if routes.insert(name.clone(), route).is_some() {
                anyhow::bail!("duplicate route '{name}'");
            }
        }
        Ok(routes)
    }
}
