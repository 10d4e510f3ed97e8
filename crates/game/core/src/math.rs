//! Small vector/angle helpers used throughout the behavior engine.
//!
//! All detection and steering math happens on the horizontal plane; height
//! only matters for view origins and line-of-sight rays.

use glam::{Quat, Vec3};

/// Project a vector onto the horizontal plane (zero out the Y component).
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Angle in degrees between two directions projected onto the horizontal
/// plane. Degenerate (near-vertical) directions yield zero.
pub fn horizontal_angle_deg(a: Vec3, b: Vec3) -> f32 {
    let a = flatten(a);
    let b = flatten(b);
    if a.length_squared() <= f32::EPSILON || b.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    a.angle_between(b).to_degrees()
}

/// Linear interpolation between two scalars.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Rotate a facing direction toward a target direction around the vertical
/// axis by at most `max_radians`. Both inputs are flattened; the result is a
/// unit vector. A degenerate target leaves the facing unchanged.
pub fn rotate_toward(current: Vec3, target: Vec3, max_radians: f32) -> Vec3 {
    let from = flatten(current).normalize_or_zero();
    let to = flatten(target).normalize_or_zero();
    if from == Vec3::ZERO || to == Vec3::ZERO {
        return current;
    }
    let angle = from.angle_between(to);
    if angle <= max_radians {
        return to;
    }
    // Sign of the Y cross component picks the turn direction.
    let sign = if from.cross(to).y >= 0.0 { 1.0 } else { -1.0 };
    Quat::from_rotation_y(sign * max_radians) * from
}
