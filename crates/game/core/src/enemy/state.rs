//! Behavior state identity and per-state working data.

use countdown_timer::Timer;
use glam::Vec3;

use crate::patrol::PatrolCursor;

/// State identity, used for transition requests, snapshots, and logs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyStateKind {
    #[default]
    Patrol,
    Alert,
    Pursue,
    Dead,
}

/// Active behavior state plus the working data it owns.
///
/// Each variant carries only what that state needs; entering a state builds
/// its working data fresh, so nothing leaks across transitions.
#[derive(Clone, Debug)]
pub enum EnemyState {
    Patrol {
        cursor: PatrolCursor,
        wait_timer: Timer,
        waiting: bool,
    },
    Alert {
        /// Last known target position being moved toward.
        investigation_point: Option<Vec3>,
        investigation_timer: Timer,
        /// True once the agent has reached the point and is looking around.
        investigating: bool,
    },
    Pursue,
    Dead,
}

impl EnemyState {
    pub fn kind(&self) -> EnemyStateKind {
        match self {
            EnemyState::Patrol { .. } => EnemyStateKind::Patrol,
            EnemyState::Alert { .. } => EnemyStateKind::Alert,
            EnemyState::Pursue => EnemyStateKind::Pursue,
            EnemyState::Dead => EnemyStateKind::Dead,
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, EnemyState::Dead)
    }
}
