//! Vision-cone detection.
//!
//! The detector runs one geometric visibility test per tick: range check,
//! horizontal field-of-view check, then an optional line-of-sight raycast.
//! It carries no policy of its own; the active behavior state installs the
//! cone parameters it wants before the test runs.

use glam::Vec3;

use crate::config::GameConfig;
use crate::env::ObstructionOracle;
use crate::math;

/// Cone parameters the detector evaluates against.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionParams {
    /// Maximum detection distance in world units.
    pub range: f32,
    /// Full field-of-view angle in degrees; half is applied to each side.
    pub fov_degrees: f32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            range: 10.0,
            fov_degrees: 90.0,
        }
    }
}

/// Outcome of one visibility test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub visible: bool,
    /// Distance from the view origin to the target; infinite when no target
    /// exists.
    pub distance: f32,
    /// Horizontal angle in degrees between the agent's facing and the
    /// target; zero when no target exists.
    pub bearing_deg: f32,
}

impl Sighting {
    /// The sighting produced when no target is present in the scene.
    pub fn none() -> Self {
        Self {
            visible: false,
            distance: f32::INFINITY,
            bearing_deg: 0.0,
        }
    }
}

/// Per-agent vision detector.
///
/// Holds the default cone (restored by [`VisionDetector::reset_parameters`])
/// plus the currently installed cone, and caches the last position a target
/// was successfully seen at.
#[derive(Clone, Debug)]
pub struct VisionDetector {
    default_params: DetectionParams,
    current: DetectionParams,
    view_height: f32,
    sees_target: bool,
    last_known_position: Option<Vec3>,
}

impl VisionDetector {
    pub fn new(params: DetectionParams, view_height: f32) -> Self {
        Self {
            default_params: params,
            current: params,
            view_height,
            sees_target: false,
            last_known_position: None,
        }
    }

    /// Install new cone parameters; the active behavior state swaps these on
    /// entry.
    pub fn set_parameters(&mut self, params: DetectionParams) {
        self.current = params;
    }

    /// Restore the default cone parameters.
    pub fn reset_parameters(&mut self) {
        self.current = self.default_params;
    }

    pub fn range(&self) -> f32 {
        self.current.range
    }

    pub fn fov_degrees(&self) -> f32 {
        self.current.fov_degrees
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Whether the most recent evaluation saw the target.
    pub fn sees_target(&self) -> bool {
        self.sees_target
    }

    /// Position the target was last seen at. Stays valid after visibility is
    /// lost; it is the investigation point for the Alert state.
    pub fn last_known_position(&self) -> Option<Vec3> {
        self.last_known_position
    }

    /// Run the visibility test for this tick.
    ///
    /// An absent target is identical to a miss, never an error. The test
    /// rejects in order: out of range, outside the horizontal FOV cone,
    /// obstructed. Only a full pass caches the last known position.
    pub fn evaluate<O>(
        &mut self,
        position: Vec3,
        forward: Vec3,
        target: Option<Vec3>,
        obstructions: Option<&O>,
    ) -> Sighting
    where
        O: ObstructionOracle + ?Sized,
    {
        let Some(target) = target else {
            self.sees_target = false;
            return Sighting::none();
        };

        let origin = position + Vec3::Y * self.view_height;
        let to_target = target - origin;
        let distance = to_target.length();
        let bearing_deg = math::horizontal_angle_deg(forward, to_target);

        let mut sighting = Sighting {
            visible: false,
            distance,
            bearing_deg,
        };

        if distance > self.current.range {
            self.sees_target = false;
            return sighting;
        }

        if bearing_deg > self.current.fov_degrees / 2.0 {
            self.sees_target = false;
            return sighting;
        }

        if let Some(obstructions) = obstructions {
            // Aim slightly above the target's feet so ground clutter does
            // not occlude it.
            let ray = (target + Vec3::Y * GameConfig::TARGET_AIM_HEIGHT) - origin;
            if obstructions.first_hit(origin, ray, distance).is_some() {
                self.sees_target = false;
                return sighting;
            }
        }

        sighting.visible = true;
        self.sees_target = true;
        self.last_known_position = Some(target);
        sighting
    }

    /// Unit direction from `position` toward the last seen target, or zero
    /// when nothing has been seen.
    pub fn direction_to_target(&self, position: Vec3) -> Vec3 {
        if !self.sees_target {
            return Vec3::ZERO;
        }
        self.last_known_position
            .map(|p| (p - position).normalize_or_zero())
            .unwrap_or(Vec3::ZERO)
    }

    /// Distance from `position` to the last seen target, or infinite when
    /// the target is not currently visible.
    pub fn distance_to_target(&self, position: Vec3) -> f32 {
        if !self.sees_target {
            return f32::INFINITY;
        }
        self.last_known_position
            .map(|p| (p - position).length())
            .unwrap_or(f32::INFINITY)
    }
}
