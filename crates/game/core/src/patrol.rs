//! Patrol routes and traversal.
//!
//! A route is an immutable ordered waypoint sequence plus a traversal
//! policy. The cursor that walks the route is owned by the consuming
//! behavior state, never by the route itself, so one route can be shared by
//! any number of agents without aliasing their progress.

use glam::Vec3;

/// One stop on a patrol route.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub position: Vec3,
    /// Seconds to wait after reaching this waypoint.
    pub wait_duration: f32,
    /// Whether the agent should sweep its view while waiting here.
    pub look_around: bool,
}

impl Waypoint {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            wait_duration: 2.0,
            look_around: false,
        }
    }
}

/// Rule for advancing past the ends of the route.
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
pub enum TraversalPolicy {
    /// Walk the route once and hold at the final waypoint.
    Once,
    /// Wrap back to the first waypoint after the last.
    #[default]
    Loop,
    /// Reverse direction at each end.
    PingPong,
}

/// Traversal progress along a route. Owned by the consuming state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PatrolCursor {
    pub index: usize,
    pub reversing: bool,
}

/// Immutable ordered waypoint sequence with a traversal policy.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Waypoint>,
    policy: TraversalPolicy,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Waypoint>, policy: TraversalPolicy) -> Self {
        Self { waypoints, policy }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Advance a cursor one step according to the traversal policy.
    ///
    /// Empty routes leave the cursor untouched; single-waypoint routes pin
    /// it at index 0.
    pub fn advance(&self, cursor: &mut PatrolCursor) {
        if self.waypoints.len() < 2 {
            cursor.index = if self.waypoints.is_empty() { cursor.index } else { 0 };
            return;
        }
        let last = self.waypoints.len() - 1;

        match self.policy {
            TraversalPolicy::PingPong => {
                if cursor.reversing {
                    cursor.index = cursor.index.saturating_sub(1);
                    if cursor.index == 0 {
                        cursor.reversing = false;
                    }
                } else {
                    cursor.index += 1;
                    if cursor.index >= last {
                        cursor.index = last;
                        cursor.reversing = true;
                    }
                }
            }
            TraversalPolicy::Loop => {
                cursor.index = (cursor.index + 1) % self.waypoints.len();
            }
            TraversalPolicy::Once => {
                cursor.index = (cursor.index + 1).min(last);
            }
        }
    }
}
