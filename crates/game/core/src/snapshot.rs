//! Read-only views of agent state for presentation and debug layers.
//!
//! Snapshots copy out the handful of fields renderers and overlays care
//! about, so nothing outside the behavior engine holds references into live
//! agents between ticks.

use glam::Vec3;

use crate::detection::DetectionParams;
use crate::enemy::{Enemy, EnemyStateKind};
use crate::player::{Player, PlayerState};
use crate::types::AgentId;

/// Presentation view of one enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub state: EnemyStateKind,
    pub position: Vec3,
    pub forward: Vec3,
    pub health: f32,
    /// Alert confidence in `[0, 1]`, for UI indicators above the agent.
    pub alert_level: f32,
    pub sees_target: bool,
    /// Cone currently installed by the active behavior state, for debug
    /// overlays.
    pub detection: DetectionParams,
}

impl AgentSnapshot {
    pub fn of(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id(),
            state: enemy.state_kind(),
            position: enemy.position(),
            forward: enemy.forward(),
            health: enemy.health(),
            alert_level: enemy.meter().level(),
            sees_target: enemy.detector().sees_target(),
            detection: DetectionParams {
                range: enemy.detector().range(),
                fov_degrees: enemy.detector().fov_degrees(),
            },
        }
    }
}

/// Presentation view of the player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub state: PlayerState,
    pub position: Vec3,
    pub forward: Vec3,
    pub speed: f32,
    pub crouched: bool,
    pub health: f32,
}

impl PlayerSnapshot {
    pub fn of(player: &Player) -> Self {
        Self {
            state: player.state(),
            position: player.position(),
            forward: player.forward(),
            speed: player.speed(),
            crouched: player.is_crouched(),
            health: player.health(),
        }
    }
}
