//! Straight-line navigation backend.
//!
//! [`KinematicNav`] is the runtime's stand-in for a full pathfinding mesh:
//! it steers directly at the requested destination at the requested speed.
//! The world syncs it with the owning agent's position before every tick, so
//! the velocity it reports is always relative to where the agent actually
//! is.

use glam::Vec3;

use game_core::NavHandle;

/// Distance at which a destination counts as reached.
const ARRIVAL_EPSILON: f32 = 0.05;

#[derive(Clone, Copy, Debug, Default)]
pub struct KinematicNav {
    position: Vec3,
    destination: Option<Vec3>,
    speed: f32,
    step: f32,
    stopped: bool,
}

impl KinematicNav {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Update the backend with the agent's authoritative position and the
    /// tick step the reported velocity will be integrated over.
    pub fn sync(&mut self, position: Vec3, dt: f32) {
        self.position = position;
        self.step = dt.max(0.0);
    }

    pub fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl NavHandle for KinematicNav {
    fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn resume(&mut self) {
        self.stopped = false;
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    fn current_velocity(&self) -> Vec3 {
        if self.stopped {
            return Vec3::ZERO;
        }
        let Some(destination) = self.destination else {
            return Vec3::ZERO;
        };
        let to = Vec3::new(
            destination.x - self.position.x,
            0.0,
            destination.z - self.position.z,
        );
        let remaining = to.length();
        if remaining <= ARRIVAL_EPSILON {
            return Vec3::ZERO;
        }
        // Slow down over the last step so integration lands on the
        // destination instead of oscillating across it.
        let mut speed = self.speed;
        if self.step > 0.0 {
            speed = speed.min(remaining / self.step);
        }
        to / remaining * speed
    }

    fn is_on_navigable_surface(&self) -> bool {
        true
    }
}
